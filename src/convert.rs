//! Pure conversion functions: TOML config structs -> crate API config types.

use notos_ranges::WeatherRanges;
use notos_swmm::ConvertConfig;

use crate::config::{ConverterToml, GeneratorToml};

/// Merges the configured range overrides onto the stock defaults.
pub fn build_default_ranges(generator: &GeneratorToml) -> WeatherRanges {
    generator.ranges.merge(&WeatherRanges::default())
}

/// Builds a [`ConvertConfig`] from the TOML converter configuration.
pub fn build_convert_config(converter: &ConverterToml) -> ConvertConfig {
    ConvertConfig {
        parameter: converter.parameter.clone(),
        decimal_places: converter.decimal_places,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notos_ranges::RangesPatch;

    #[test]
    fn default_generator_keeps_stock_ranges() {
        let ranges = build_default_ranges(&GeneratorToml::default());
        assert_eq!(ranges, WeatherRanges::default());
    }

    #[test]
    fn range_overrides_apply() {
        let generator = GeneratorToml {
            use_random_walk: true,
            ranges: RangesPatch {
                wind_speed_max: Some(15.0),
                ..RangesPatch::default()
            },
        };
        let ranges = build_default_ranges(&generator);
        assert_eq!(ranges.wind_speed.max, 15.0);
        assert_eq!(ranges.wind_speed.min, WeatherRanges::default().wind_speed.min);
    }

    #[test]
    fn convert_config_carries_both_fields() {
        let config = build_convert_config(&ConverterToml {
            parameter: "wind_speed".to_string(),
            decimal_places: 1,
        });
        assert_eq!(config.parameter, "wind_speed");
        assert_eq!(config.decimal_places, 1);
    }
}
