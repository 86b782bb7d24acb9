use crate::config::Config;
use crate::enhance::PipelineStage;

pub fn render_status(config: &Config) -> String {
    let options = &config.enhancement;
    let stages: Vec<String> = options
        .enabled_stages()
        .map(|stage| match stage {
            PipelineStage::Summarization => format!("{stage} ({}%)", options.summary_length),
            PipelineStage::Translation => format!("{stage} ({})", options.translation_style),
            _ => stage.to_string(),
        })
        .collect();

    let lines = [
        "◆ Digi-Ktav".to_string(),
        String::new(),
        format!("  Version      {}", env!("CARGO_PKG_VERSION")),
        format!("  Config       {}", config.config_path.display()),
        format!("  Log level    {}", config.log_level),
        String::new(),
        format!("  Backend      {}", config.backend.api_url),
        format!(
            "  Timeouts     {}s request, {}s connect, {}s recognition",
            config.backend.timeout_secs,
            config.backend.connect_timeout_secs,
            config.backend.ocr_timeout_secs
        ),
        format!(
            "  Images       ≤{} KB, ≤{} px",
            config.image.max_size_kb, config.image.max_dimension
        ),
        String::new(),
        format!(
            "  Stages       {}",
            if stages.is_empty() {
                "(none)".to_string()
            } else {
                stages.join(" → ")
            }
        ),
        format!(
            "  Track        {}",
            if options.track_changes { "on" } else { "off" }
        ),
    ];
    lines.join("\n")
}
