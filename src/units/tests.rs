#[cfg(test)]
mod tests {
    use super::super::converter::Converter;
    use super::super::error::ConversionError;
    use super::super::splitter::is_operator;
    use super::super::table;
    use crate::output::formatter::round_to;
    use rstest::rstest;

    fn factor(units: &str) -> f64 {
        let converter = Converter::new(units).expect("expression should convert");
        round_to(converter.mult_factor(), 14)
    }

    #[test]
    fn test_wrong_units() {
        assert!(matches!(
            Converter::new("zebra"),
            Err(ConversionError::MalformedUnit { token }) if token == "zebra"
        ));
        assert!(matches!(
            Converter::new("california"),
            Err(ConversionError::MalformedUnit { .. })
        ));
    }

    #[rstest]
    #[case("tonne * day")]
    #[case("degree / min")]
    #[case("(min) * h")]
    fn test_spaces_in_units(#[case] units: &str) {
        assert!(matches!(
            Converter::new(units),
            Err(ConversionError::MalformedUnit { .. })
        ));
    }

    #[rstest]
    #[case("((()")]
    #[case(")(")]
    #[case("(((")]
    #[case("(min*h))")]
    fn test_malformed_parentheses(#[case] units: &str) {
        assert!(matches!(
            Converter::new(units),
            Err(ConversionError::MalformedParentheses { .. })
        ));
    }

    #[test]
    fn test_lowercases_units() {
        let units = "MIN*MIN/(((HOUR*T)))";
        let converter = Converter::new(units).unwrap();
        assert_eq!(converter.units(), units.to_lowercase());
    }

    #[test]
    fn test_complex_unit_name() {
        let converter = Converter::new("(degree)/(minute*day)").unwrap();
        assert_eq!(converter.unit_name(), "(rad)/(s*s)");
    }

    #[test]
    fn test_area_angle_per_volume_mass_time() {
        let converter = Converter::new("(second*ha)/(litre*tonne*h)").unwrap();
        assert_eq!(converter.unit_name(), "(rad*m2)/(m3*kg*s)");
        assert_eq!(round_to(converter.mult_factor(), 14), 0.000_013_467_046_70);
    }

    #[rstest]
    #[case("degree/min", "rad/s")]
    #[case("(degree/min)", "(rad/s)")]
    #[case("((((degree/min))))", "((((rad/s))))")]
    #[case("(((((degree)/(min)))))", "(((((rad)/(s)))))")]
    #[case("((degree))/min", "((rad))/s")]
    #[case("degree/(((min)))", "rad/(((s)))")]
    #[case("(degree)/(min)", "(rad)/(s)")]
    fn test_well_formed_parentheses(#[case] units: &str, #[case] unit_name: &str) {
        let converter = Converter::new(units).unwrap();
        assert_eq!(converter.unit_name(), unit_name);
        assert_eq!(round_to(converter.mult_factor(), 14), 0.000_290_888_208_67);
    }

    #[rstest]
    #[case("(degree)/(minute*(day))")]
    #[case("(degree)/((minute)*day)")]
    #[case("degree/(minute*(day))")]
    #[case("degree/((minute)*day)")]
    fn test_degree_per_minute_day(#[case] units: &str) {
        assert_eq!(factor(units), 0.000_000_003_366_76);
    }

    #[rstest]
    #[case("(min*min*min)/min")]
    #[case("((min)*min*min)/min")]
    #[case("(min*(min)*min)/min")]
    #[case("(min*min*(min))/min")]
    #[case("((min*min)*min)/min")]
    #[case("(min*(min*min))/min")]
    #[case("(min*(min*min))/(min)")]
    fn test_minute_cubed_per_minute(#[case] units: &str) {
        assert_eq!(factor(units), 3600.0);
    }

    #[rstest]
    #[case("h/(h*h*h)")]
    #[case("h/((h)*h*h)")]
    #[case("h/(h*(h)*h)")]
    #[case("h/(h*h*(h))")]
    #[case("h/((h*h)*h)")]
    #[case("h/(h*(h*h))")]
    #[case("((h))/(h*(h*h))")]
    fn test_hour_per_hour_cubed(#[case] units: &str) {
        assert_eq!(factor(units), 0.000_000_077_160_49);
    }

    #[test]
    fn test_deeply_mixed_unit() {
        let units =
            "((degree*°)/degree)/degree*(degree)/degree*(degree)/(minute*((day)))*degree";
        let converter = Converter::new(units).unwrap();
        assert_eq!(
            converter.unit_name(),
            "((rad*rad)/rad)/rad*(rad)/rad*(rad)/(s*((s)))*rad"
        );
        assert_eq!(round_to(converter.mult_factor(), 14), 0.000_000_000_058_76);
    }

    #[test]
    fn test_time_per_mass() {
        assert_eq!(factor("min/t"), 0.06);
    }

    #[test]
    fn test_every_token_converts_to_si_only() {
        let tokens: Vec<&str> = table::entries().map(|(token, _)| token).collect();
        let units = format!("({})", tokens.join("*"));
        let converter = Converter::new(&units).unwrap();

        assert!(converter.mult_factor() > 0.0);
        for token in converter
            .unit_name()
            .split(|c: char| c == '(' || c == ')' || is_operator(c))
            .filter(|t| !t.is_empty())
        {
            assert!(table::lookup(token).is_none(), "'{}' was not rewritten", token);
        }
    }
}
