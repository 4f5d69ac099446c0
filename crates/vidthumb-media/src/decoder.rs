use std::path::Path;

use log::debug;
use vidthumb_core::scale;

use crate::error::{MediaError, Result};

/// Decoded video frame with raw pixel data.
pub struct VideoFrame {
    pub width: u32,
    pub height: u32,
    /// RGB pixel data, row-major, 3 bytes per pixel.
    pub data: Vec<u8>,
    /// Presentation timestamp in seconds.
    pub pts_secs: f64,
}

#[derive(Debug, Clone)]
pub struct StreamInfo {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub duration_secs: f64,
    pub codec_name: String,
}

/// Single-use FFmpeg decoder for pulling one frame out of a container.
pub struct FfmpegDecoder {
    input_ctx: rsmpeg::avformat::AVFormatContextInput,
    decode_ctx: rsmpeg::avcodec::AVCodecContext,
    sws_ctx: Option<rsmpeg::swscale::SwsContext>,
    sws_dst_dims: (i32, i32),
    video_stream_index: usize,
    stream_info: StreamInfo,
}

impl FfmpegDecoder {
    pub fn open(path: &Path) -> Result<Self> {
        use std::ffi::CString;

        let path_str = path.to_string_lossy().to_string();
        let c_path = CString::new(path_str.clone())
            .map_err(|_| MediaError::OpenFailed(path_str.clone()))?;

        let input_ctx = rsmpeg::avformat::AVFormatContextInput::open(&c_path)
            .map_err(|e| MediaError::OpenFailed(format!("{path_str}: {e}")))?;

        let (video_stream_index, decoder) = {
            let streams = input_ctx.streams();
            let mut found = None;
            for (i, stream) in streams.iter().enumerate() {
                let codecpar = stream.codecpar();
                if codecpar.codec_type == rsmpeg::ffi::AVMEDIA_TYPE_VIDEO {
                    if let Some(decoder) =
                        rsmpeg::avcodec::AVCodec::find_decoder(codecpar.codec_id)
                    {
                        found = Some((i, decoder));
                        break;
                    }
                }
            }
            found.ok_or(MediaError::NoVideoStream)?
        };

        let mut decode_ctx = rsmpeg::avcodec::AVCodecContext::new(&decoder);
        {
            let streams = input_ctx.streams();
            let video_stream = &streams[video_stream_index];
            decode_ctx
                .apply_codecpar(&video_stream.codecpar())
                .map_err(|e| MediaError::DecoderError(format!("apply_codecpar: {e}")))?;
        }
        // Multithreaded decoding, 0 = auto-detect thread count.
        unsafe {
            use rsmpeg::UnsafeDerefMut;
            decode_ctx.deref_mut().thread_count = 0;
        }

        decode_ctx
            .open(None)
            .map_err(|e| MediaError::DecoderError(format!("open: {e}")))?;

        let width = decode_ctx.width as u32;
        let height = decode_ctx.height as u32;

        let stream_info = {
            let streams = input_ctx.streams();
            let video_stream = &streams[video_stream_index];
            let tb = video_stream.time_base;
            let duration_secs = if video_stream.duration > 0 {
                video_stream.duration as f64 * tb.num as f64 / tb.den as f64
            } else {
                input_ctx.duration as f64 / rsmpeg::ffi::AV_TIME_BASE as f64
            };
            let fps = {
                let r = video_stream.r_frame_rate;
                if r.den > 0 {
                    r.num as f64 / r.den as f64
                } else {
                    30.0
                }
            };
            StreamInfo {
                width,
                height,
                fps,
                duration_secs,
                codec_name: decoder.name().to_string_lossy().to_string(),
            }
        };

        debug!(
            "opened {path_str}: {}x{} {} at {:.2} fps",
            width, height, stream_info.codec_name, stream_info.fps
        );

        Ok(Self {
            input_ctx,
            decode_ctx,
            sws_ctx: None,
            sws_dst_dims: (0, 0),
            video_stream_index,
            stream_info,
        })
    }

    pub fn stream_info(&self) -> StreamInfo {
        self.stream_info.clone()
    }

    /// Decode the frame closest to `target_secs`, scaled to the bounding
    /// box from `vidthumb_core::scale::target_dimensions`.
    ///
    /// Seeks to the preceding keyframe, then walks forward comparing the
    /// last frame at-or-before the target against the first one after it.
    /// Targets past the end of the stream settle on the final frame.
    pub fn frame_at(
        &mut self,
        target_secs: f64,
        max_width: u32,
        max_height: u32,
    ) -> Result<VideoFrame> {
        self.seek_to(target_secs)?;

        let mut prev: Option<(rsmpeg::avutil::AVFrame, f64)> = None;
        while let Some((frame, pts_secs)) = self.next_raw_frame()? {
            if pts_secs >= target_secs {
                let (chosen, chosen_pts) = match prev {
                    Some((prev_frame, prev_pts))
                        if target_secs - prev_pts <= pts_secs - target_secs =>
                    {
                        (prev_frame, prev_pts)
                    }
                    _ => (frame, pts_secs),
                };
                debug!("target {target_secs:.3}s resolved to frame at {chosen_pts:.3}s");
                return self.convert_frame(&chosen, chosen_pts, max_width, max_height);
            }
            prev = Some((frame, pts_secs));
        }

        match prev {
            Some((frame, pts_secs)) => {
                debug!("target {target_secs:.3}s past end, using final frame at {pts_secs:.3}s");
                self.convert_frame(&frame, pts_secs, max_width, max_height)
            }
            None => Err(MediaError::NoFrame(target_secs)),
        }
    }

    fn seek_to(&mut self, timestamp_secs: f64) -> Result<()> {
        let ts = {
            let streams = self.input_ctx.streams();
            let tb = streams[self.video_stream_index].time_base;
            (timestamp_secs * tb.den as f64 / tb.num as f64) as i64
        };

        self.input_ctx
            .seek(
                self.video_stream_index as i32,
                ts,
                rsmpeg::ffi::AVSEEK_FLAG_BACKWARD as i32,
            )
            .map_err(|e| MediaError::SeekError(format!("{e}")))?;

        self.decode_ctx.flush_buffers();

        Ok(())
    }

    /// Decode the next frame in the decoder's native pixel format along
    /// with its PTS in seconds. Conversion happens only for the frame that
    /// wins the closest-to-target comparison.
    fn next_raw_frame(&mut self) -> Result<Option<(rsmpeg::avutil::AVFrame, f64)>> {
        loop {
            match self.input_ctx.read_packet() {
                Ok(Some(packet)) => {
                    if packet.stream_index as usize != self.video_stream_index {
                        continue;
                    }
                    self.decode_ctx
                        .send_packet(Some(&packet))
                        .map_err(|e| MediaError::DecoderError(format!("send_packet: {e}")))?;

                    match self.decode_ctx.receive_frame() {
                        Ok(frame) => {
                            let pts_secs = self.frame_pts_secs(&frame);
                            return Ok(Some((frame, pts_secs)));
                        }
                        Err(_) => continue,
                    }
                }
                Ok(None) => {
                    // EOF: flush decoder.
                    self.decode_ctx.send_packet(None).ok();
                    match self.decode_ctx.receive_frame() {
                        Ok(frame) => {
                            let pts_secs = self.frame_pts_secs(&frame);
                            return Ok(Some((frame, pts_secs)));
                        }
                        Err(_) => return Ok(None),
                    }
                }
                Err(e) => {
                    return Err(MediaError::DecoderError(format!("read_packet: {e}")));
                }
            }
        }
    }

    fn frame_pts_secs(&self, frame: &rsmpeg::avutil::AVFrame) -> f64 {
        let streams = self.input_ctx.streams();
        let tb = streams[self.video_stream_index].time_base;
        if frame.pts != rsmpeg::ffi::AV_NOPTS_VALUE {
            frame.pts as f64 * tb.num as f64 / tb.den as f64
        } else {
            0.0
        }
    }

    fn convert_frame(
        &mut self,
        frame: &rsmpeg::avutil::AVFrame,
        pts_secs: f64,
        max_width: u32,
        max_height: u32,
    ) -> Result<VideoFrame> {
        let src_w = frame.width;
        let src_h = frame.height;

        let (width, height) =
            scale::target_dimensions(src_w as u32, src_h as u32, max_width, max_height);
        let (dst_w, dst_h) = (width as i32, height as i32);

        if self.sws_ctx.is_none() || self.sws_dst_dims != (dst_w, dst_h) {
            self.sws_ctx = Some(
                rsmpeg::swscale::SwsContext::get_context(
                    src_w,
                    src_h,
                    frame.format,
                    dst_w,
                    dst_h,
                    rsmpeg::ffi::AV_PIX_FMT_RGB24,
                    rsmpeg::ffi::SWS_BILINEAR,
                    None,
                    None,
                    None,
                )
                .ok_or_else(|| MediaError::DecoderError("failed to create sws context".into()))?,
            );
            self.sws_dst_dims = (dst_w, dst_h);
        }

        let sws = self.sws_ctx.as_mut().unwrap();

        let mut dst_frame = rsmpeg::avutil::AVFrame::new();
        dst_frame.set_width(dst_w);
        dst_frame.set_height(dst_h);
        dst_frame.set_format(rsmpeg::ffi::AV_PIX_FMT_RGB24);
        dst_frame
            .alloc_buffer()
            .map_err(|e| MediaError::DecoderError(format!("alloc_buffer: {e}")))?;

        sws.scale_frame(frame, 0, src_h, &mut dst_frame)
            .map_err(|e| MediaError::DecoderError(format!("scale_frame: {e}")))?;

        // Copy row by row; the scaled buffer may carry per-row alignment
        // padding, so linesize is not always width * 3.
        let row_bytes = (width * 3) as usize;
        let linesize = dst_frame.linesize[0] as usize;
        let mut data = Vec::with_capacity(row_bytes * height as usize);
        for row in 0..height as usize {
            let line = unsafe {
                std::slice::from_raw_parts(
                    (dst_frame.data[0] as *const u8).add(row * linesize),
                    row_bytes,
                )
            };
            data.extend_from_slice(line);
        }

        Ok(VideoFrame {
            width,
            height,
            data,
            pts_secs,
        })
    }
}
