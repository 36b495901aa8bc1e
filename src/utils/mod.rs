//! Helper macros and small utilities shared across the crate.
//!
//! - Macros for common struct operations (getter functions, builder-style
//!   `with_*` methods).
//! - Logger initialisation for binaries built on top of the crate.
//! - Score formatting used by the bedGraph writer.

use log::LevelFilter;

use crate::data_structs::typedef::ScoreType;

#[macro_export]
macro_rules! getter_fn {
    ($field_name: ident, ref $field_type: ty) => {
        pub fn $field_name(&self) -> &$field_type {
            &self.$field_name
        }
    };
    ($field_name: ident, $field_type: ty) => {
        pub fn $field_name(&self) -> $field_type {
            self.$field_name
        }
    };
}
pub use getter_fn;

#[macro_export]
macro_rules! with_field_fn {
    ($field_name: ident, $field_type: ty) => {
        paste::paste! {
            pub fn [<with_$field_name>](mut self, value: $field_type) -> Self {
                self.$field_name = value;
                self
            }
        }
    };
}
pub use with_field_fn;

/// Maps a `-v` repetition count onto a log level filter.
pub fn verbosity_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialises `pretty_env_logger`. `RUST_LOG`, when set, takes precedence
/// over `verbose`.
pub fn init_logger(verbose: u8) -> anyhow::Result<()> {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(verbosity_level(verbose));
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.try_init()?;
    Ok(())
}

/// Renders a score the way genome browsers expect it in a bedGraph value
/// column: integral values keep one decimal (`2.0`), everything else uses the
/// shortest representation that round-trips.
pub fn format_score(score: ScoreType) -> String {
    if score.is_finite() && score.fract() == 0.0 {
        format!("{score:.1}")
    }
    else {
        format!("{score}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(2.0), "2.0");
        assert_eq!(format_score(0.5), "0.5");
        assert_eq!(format_score(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_score(12.0), "12.0");
    }

    #[test]
    fn test_verbosity_level() {
        assert_eq!(verbosity_level(0), LevelFilter::Warn);
        assert_eq!(verbosity_level(1), LevelFilter::Info);
        assert_eq!(verbosity_level(2), LevelFilter::Debug);
        assert_eq!(verbosity_level(9), LevelFilter::Trace);
    }

    #[derive(Default)]
    struct Dummy {
        size:  u64,
        label: String,
    }

    impl Dummy {
        getter_fn!(size, u64);
        getter_fn!(label, ref String);
        with_field_fn!(size, u64);
        with_field_fn!(label, String);
    }

    #[test]
    fn test_field_macros() {
        let dummy = Dummy::default().with_size(7).with_label("x".into());
        assert_eq!(dummy.size(), 7);
        assert_eq!(dummy.label(), "x");
    }
}
