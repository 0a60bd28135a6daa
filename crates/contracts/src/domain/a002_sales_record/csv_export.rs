use super::aggregate::SalesRecord;

pub const CSV_HEADER: &str = "Rank,Medicine Name,Units Sold,Total Revenue (₹)";
pub const CSV_FILE_NAME: &str = "top_selling_medicines.csv";

/// Quotes a CSV field, doubling embedded quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Ranked export of the top-selling table. Rows are joined by `\n`
/// without a trailing newline.
pub fn export_top_selling(records: &[SalesRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for (index, record) in records.iter().enumerate() {
        lines.push(format!(
            "{},{},{},{:.2}",
            index + 1,
            quote(&record.name),
            record.units_sold,
            record.total_revenue
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, units: u32, revenue: f64) -> SalesRecord {
        SalesRecord {
            id: name.into(),
            medicine_id: name.into(),
            name: name.into(),
            units_sold: units,
            total_revenue: revenue,
        }
    }

    /// Splits one exported row back into its four fields.
    fn parse_row(line: &str) -> (u32, String, u32, f64) {
        let first = line.find(',').unwrap();
        let last = line.rfind(',').unwrap();
        let before_last = line[..last].rfind(',').unwrap();
        let name = &line[first + 1..before_last];
        let name = name[1..name.len() - 1].replace("\"\"", "\"");
        (
            line[..first].parse().unwrap(),
            name,
            line[before_last + 1..last].parse().unwrap(),
            line[last + 1..].parse().unwrap(),
        )
    }

    #[test]
    fn test_export_layout() {
        let csv = export_top_selling(&[
            record("Vitamin C 500mg", 350, 17500.0),
            record("Metformin 500mg", 180, 14400.5),
        ]);
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "1,\"Vitamin C 500mg\",350,17500.00");
        assert_eq!(lines[2], "2,\"Metformin 500mg\",180,14400.50");
    }

    #[test]
    fn test_export_parses_back() {
        let records = vec![
            record("Syrup \"Kids\", 100ml", 12, 960.0),
            record("Aspirin 75mg", 310, 4650.0),
        ];
        let csv = export_top_selling(&records);
        for (i, line) in csv.lines().skip(1).enumerate() {
            let (rank, name, units, revenue) = parse_row(line);
            assert_eq!(rank as usize, i + 1);
            assert_eq!(name, records[i].name);
            assert_eq!(units, records[i].units_sold);
            assert!((revenue - records[i].total_revenue).abs() < 0.005);
        }
    }

    #[test]
    fn test_export_empty_is_header_only() {
        assert_eq!(export_top_selling(&[]), CSV_HEADER);
    }
}
