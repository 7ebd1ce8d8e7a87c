use crate::record::GameRecord;

/// Placeholder printed for a requested header field the record lacks.
pub const UNKNOWN_VALUE: &str = "Unknown";

pub const DEFAULT_HEADER_FIELDS: [&str; 4] = ["Event", "White", "Black", "Result"];
pub const DEFAULT_MOVE_LIMIT: usize = 10;

/// Which header fields to report, in which order, and how many plies.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub header_fields: Vec<String>,
    pub move_limit: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            header_fields: DEFAULT_HEADER_FIELDS.map(String::from).to_vec(),
            move_limit: DEFAULT_MOVE_LIMIT,
        }
    }
}

/// Renders the report as plain text lines: one per requested header field in
/// the requested order, then one `Move <ply>: <san>` line per ply up to the
/// configured limit.
pub fn render_lines(record: &GameRecord, options: &ReportOptions) -> Vec<String> {
    let move_count = record.moves.len().min(options.move_limit);
    let mut lines = Vec::with_capacity(options.header_fields.len() + move_count);

    for field in &options.header_fields {
        let value = record.headers.get(field).unwrap_or(UNKNOWN_VALUE);
        lines.push(format!("{}: {}", field, value));
    }

    for ply in record.moves.iter().take(options.move_limit) {
        lines.push(format!("Move {}: {}", ply.number, ply.san));
    }

    lines
}

/// Renders the same selection as one JSON object. Header fields keep the
/// requested order; the moves array is truncated exactly like the line
/// format.
pub fn render_json(record: &GameRecord, options: &ReportOptions) -> String {
    let headers_json: Vec<String> = options
        .header_fields
        .iter()
        .map(|field| {
            let value = record.headers.get(field).unwrap_or(UNKNOWN_VALUE);
            format!("{}:{}", json_string(field), json_string(value))
        })
        .collect();

    let moves_json: Vec<String> = record
        .moves
        .iter()
        .take(options.move_limit)
        .map(|ply| format!(r#"{{"ply":{},"san":{}}}"#, ply.number, json_string(&ply.san)))
        .collect();

    format!(
        r#"{{"headers":{{{}}},"moves":[{}]}}"#,
        headers_json.join(","),
        moves_json.join(",")
    )
}

fn json_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
}
