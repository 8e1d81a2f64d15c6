use ottomap::{PlotConfig, Plotter};
use validator::ValidationErrors;

#[test]
fn test_plot_config_validation() {
    let config = PlotConfig {
        strict: false, // valid
        max_moves: 0,  // invalid
    };

    // This is a bit of a lazy check but it works well enough
    let err = Plotter::new(config).unwrap_err();
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    assert_eq!(
        error_fields,
        vec!["max_moves"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

#[test]
fn test_plot_config_default() {
    let plotter = Plotter::new(PlotConfig::default()).unwrap();
    assert!(plotter.config().strict);
    assert_eq!(plotter.config().max_moves, 1000);
}

#[test]
fn test_plot_config_deserialize_partial() {
    // Missing fields fall back to defaults
    let config: PlotConfig =
        serde_json::from_str(r#"{"strict": false}"#).unwrap();
    assert_eq!(
        config,
        PlotConfig {
            strict: false,
            ..Default::default()
        }
    );
}
