use serde::{Deserialize, Serialize};

/// Rows shown in the preview table.
pub const PREVIEW_ROWS: usize = 5;

/// One previewed CSV line, fields taken positionally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRow {
    pub name: String,
    pub batch: String,
    pub stock: String,
    pub price: String,
    pub expiry: String,
}

/// Lines 2 to 6 of `text`, blank lines dropped, split naively on commas.
///
/// Quoted fields are not understood; missing trailing fields stay empty.
pub fn parse_preview(text: &str) -> Vec<PreviewRow> {
    text.split('\n')
        .skip(1)
        .take(PREVIEW_ROWS)
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut fields = line.split(',').map(|f| f.trim_end_matches('\r').to_string());
            PreviewRow {
                name: fields.next().unwrap_or_default(),
                batch: fields.next().unwrap_or_default(),
                stock: fields.next().unwrap_or_default(),
                price: fields.next().unwrap_or_default(),
                expiry: fields.next().unwrap_or_default(),
            }
        })
        .collect()
}

/// Simulated upload progress: +10 per tick, held at 95 until the upload
/// resolves.
pub fn next_progress(current: u32) -> u32 {
    (current + 10).min(95)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_lines_give_five_rows() {
        let csv = "name,batch,stock,price,expiry\n\
                   Paracetamol,P1,8,25,2025-12-31\n\
                   Amoxicillin,A2,5,75,2024-08-30\n\
                   Cetirizine,C3,12,40,2026-05-20\n\
                   Omeprazole,O4,0,60,2025-10-15\n\
                   Ibuprofen,I5,30,35,2025-11-30";
        let rows = parse_preview(csv);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].name, "Paracetamol");
        assert_eq!(rows[4].expiry, "2025-11-30");
    }

    #[test]
    fn test_only_first_five_data_lines_are_read() {
        let mut csv = String::from("header");
        for i in 0..10 {
            csv.push_str(&format!("\nMed{i},B,1,2,2025-01-01"));
        }
        let rows = parse_preview(&csv);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4].name, "Med4");
    }

    #[test]
    fn test_blank_lines_dropped_and_missing_fields_empty() {
        let csv = "h\r\nAspirin,A75\r\n\r\n   \nVitamin C,VC,100,50,2025-09-01\r\n";
        let rows = parse_preview(csv);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].batch, "A75");
        assert_eq!(rows[0].stock, "");
        assert_eq!(rows[1].expiry, "2025-09-01");
    }

    #[test]
    fn test_header_only_gives_nothing() {
        assert!(parse_preview("name,batch").is_empty());
        assert!(parse_preview("").is_empty());
    }

    #[test]
    fn test_progress_caps_at_95() {
        let mut p = 0;
        for _ in 0..20 {
            p = next_progress(p);
        }
        assert_eq!(p, 95);
        assert_eq!(next_progress(0), 10);
        assert_eq!(next_progress(90), 95);
    }
}
