#[cfg(test)]
mod config_file_tests {
    use crate::{AppConfig, RangeMode};

    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut temp_file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        temp_file.write_all(contents.as_bytes()).unwrap();
        temp_file.flush().unwrap();
        temp_file
    }

    #[test]
    fn test_load_partial_file_falls_back_to_defaults() {
        let temp_file = write_config(
            r#"
            [controller]
            elevators = [1, 2]
            destination_dispatch = true
            "#,
        );

        let config = AppConfig::load(temp_file.path().to_str()).unwrap();

        // Values from the file
        assert_eq!(config.controller.elevators, vec![1, 2]);
        assert!(config.controller.destination_dispatch);

        // Untouched defaults
        assert_eq!(config.controller.elevator_range, 5);
        assert_eq!(config.controller.range_mode, RangeMode::Floors);
        assert_eq!(config.controller.selection_strategy, "directional");
        assert_eq!(config.building.top_floor, 30);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let temp_file = write_config(
            r#"
            [building]
            bottom_floor = 12
            top_floor = 3
            "#,
        );

        assert!(AppConfig::load(temp_file.path().to_str()).is_err());
    }
}
