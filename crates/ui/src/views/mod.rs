mod drill;

pub use drill::DrillView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
