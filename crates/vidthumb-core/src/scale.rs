/// Output dimensions for a frame of `src_w` x `src_h` constrained by the
/// requested maximums.
///
/// A zero maximum means "no constraint on that axis":
/// - both zero: native resolution;
/// - one zero: the missing dimension is derived from the source aspect
///   ratio, `round(target / source_axis * source_other_axis)`;
/// - both nonzero: exactly that box, without preserving aspect ratio.
pub fn target_dimensions(src_w: u32, src_h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    match (max_w, max_h) {
        (0, 0) => (src_w, src_h),
        (w, 0) => {
            let h = (w as f64 / src_w as f64 * src_h as f64).round() as u32;
            (w, h.max(1))
        }
        (0, h) => {
            let w = (h as f64 / src_h as f64 * src_w as f64).round() as u32;
            (w.max(1), h)
        }
        (w, h) => (w, h),
    }
}
