use crate::error::{ChartError, ChartResult};

/// Title and value-axis label carried by a dataset's first column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartHeader {
    pub title: String,
    pub axis_label: String,
}

/// Splits `"<Title> (<AxisLabel>)"` on the first `(` and the first `)`.
///
/// The title is trimmed; the axis label is kept verbatim.
pub fn parse_header(header: &str) -> ChartResult<ChartHeader> {
    let malformed = || ChartError::HeaderFormat {
        header: header.to_owned(),
    };

    let open = header.find('(').ok_or_else(malformed)?;
    let close = header.find(')').ok_or_else(malformed)?;
    // A `)` ahead of the first `(` leaves nothing between them.
    let axis_label = header.get(open + 1..close).unwrap_or_default();

    Ok(ChartHeader {
        title: header[..open].trim().to_owned(),
        axis_label: axis_label.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::parse_header;

    #[test]
    fn nested_parens_stop_at_first_close() {
        let header = parse_header("Load (ms (p95))").expect("header");
        assert_eq!(header.title, "Load");
        assert_eq!(header.axis_label, "ms (p95");
    }

    #[test]
    fn close_before_open_yields_empty_axis_label() {
        let header = parse_header("Latency) (ms").expect("header");
        assert_eq!(header.title, "Latency)");
        assert_eq!(header.axis_label, "");
    }
}
