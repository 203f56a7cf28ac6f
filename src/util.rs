/// Evaluate an expression, logging its wall time at debug level.
macro_rules! profile(
  ($title: expr, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $expr;
    log::debug!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);

pub(crate) use profile;

/// Number of whole pixels covered by a disk, `⌊πr²⌋`.
pub fn disk_area(radius: u32) -> u64 {
  (std::f64::consts::PI * (radius as f64).powi(2)) as u64
}
