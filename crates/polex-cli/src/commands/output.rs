//! Result formatting shared by `extract` and `batch`.

use polex_core::PipelineResult;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output, one row per field
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for results written to disk.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

pub fn format_result(
    result: &PipelineResult,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(result: &PipelineResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "run_id",
        "timestamp",
        "field",
        "value",
        "source",
        "confidence",
        "required",
        "reason",
    ])?;

    let run_id = &result.metadata.run_id;
    let timestamp = result.metadata.timestamp.to_rfc3339();

    for (name, field) in &result.fields {
        let value = field.value.as_ref().map(|v| v.to_string()).unwrap_or_default();
        let confidence = format!("{:.2}", field.confidence);

        wtr.write_record([
            run_id.as_str(),
            timestamp.as_str(),
            name.as_str(),
            value.as_str(),
            field.source.map(|s| s.as_str()).unwrap_or_default(),
            confidence.as_str(),
            if field.required { "true" } else { "false" },
            field.reason.map(|r| r.as_str()).unwrap_or_default(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &PipelineResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Run: {}\n", result.metadata.run_id));
    output.push_str(&format!("Time: {}\n", result.metadata.timestamp.to_rfc3339()));
    output.push_str(&format!("Rules: {}\n", result.metadata.version));
    output.push('\n');

    for (name, field) in &result.fields {
        match (&field.value, field.source) {
            (Some(value), Some(source)) => output.push_str(&format!(
                "  {:<20} {} (from {}, confidence {:.2})\n",
                name, value, source, field.confidence
            )),
            _ => output.push_str(&format!(
                "  {:<20} - ({})\n",
                name,
                field.reason.map(|r| r.as_str()).unwrap_or("not_found")
            )),
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use polex_core::{Pipeline, RunMetadata};

    fn result() -> PipelineResult {
        let metadata = RunMetadata {
            run_id: "run-1".to_string(),
            timestamp: "2024-01-15T09:30:00Z".parse().unwrap(),
            version: "v1".to_string(),
        };
        Pipeline::new().run_with_metadata("Policy No: PN-1\nDeductible: $2,500", "", metadata)
    }

    #[test]
    fn test_csv_rows() {
        let csv = format_result(&result(), OutputFormat::Csv, false).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[1],
            "run-1,2024-01-15T09:30:00+00:00,policy_number,pn-1,email,1.00,true,"
        );
        assert_eq!(
            lines[2],
            "run-1,2024-01-15T09:30:00+00:00,limit_of_liability,,,0.00,true,required_field_missing"
        );
        assert_eq!(
            lines[3],
            "run-1,2024-01-15T09:30:00+00:00,deductible,2500,email,0.90,false,"
        );
    }

    #[test]
    fn test_text_summary() {
        let text = format_result(&result(), OutputFormat::Text, false).unwrap();

        assert!(text.contains("policy_number        pn-1 (from email, confidence 1.00)"));
        assert!(text.contains("limit_of_liability   - (required_field_missing)"));
    }
}
