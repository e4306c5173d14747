use crate::report::TableView;

pub fn write_csv<W>(view: &TableView, writer: W) -> anyhow::Result<()>
where
    W: std::io::Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&view.headers)?;
    for row in &view.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Make a display name usable as a single file name component.
pub fn file_name_safe(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_has_header_then_rows() {
        let view = TableView {
            headers: vec!["Datum".to_string(), "Notiz".to_string()],
            rows: vec![vec!["2024-03-05".to_string(), "a, b".to_string()]],
        };
        let mut out = Vec::new();
        write_csv(&view, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Datum,Notiz\n2024-03-05,\"a, b\"\n"
        );
    }

    #[test]
    fn file_names_lose_path_separators() {
        assert_eq!(
            file_name_safe("Report_Jane/Doe_2024-01-02"),
            "Report_Jane_Doe_2024-01-02"
        );
        assert_eq!(file_name_safe("Report_Jane Doe"), "Report_Jane Doe");
    }
}
