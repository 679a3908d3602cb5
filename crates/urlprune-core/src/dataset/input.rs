//! Tab-separated URL input.

use std::collections::HashMap;
use std::path::Path;

use super::error::DatasetError;
use super::record::UrlRecord;

/// Reads a tab-separated URL file with a header row.
///
/// `canonical_url` is required; `url_id` and `full_domain` are optional and
/// derived per row when missing or empty. Fields are never quoted, since
/// URLs may contain `"`. Rows with an empty `canonical_url` are skipped.
pub fn read_records(path: &Path) -> Result<Vec<UrlRecord>, DatasetError> {
    let csv_err = |source| DatasetError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;

    let headers = reader.headers().map_err(csv_err)?.clone();
    let column = |name: &str| headers.iter().position(|h| h.trim() == name);
    let url_col = column("canonical_url").ok_or_else(|| DatasetError::MissingColumn {
        path: path.to_path_buf(),
        column: "canonical_url",
    })?;
    let id_col = column("url_id");
    let domain_col = column("full_domain");

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_err)?;
        let url = row.get(url_col).unwrap_or("").trim();
        if url.is_empty() {
            continue;
        }
        let field = |col: Option<usize>| {
            col.and_then(|c| row.get(c))
                .map(|s| s.trim().to_string())
        };
        records.push(UrlRecord::new(url, field(id_col), field(domain_col)));
    }

    tracing::debug!(path = %path.display(), rows = records.len(), "read url records");
    Ok(records)
}

/// Like [`read_records`], but an input without rows is an error.
pub fn read_nonempty_records(path: &Path) -> Result<Vec<UrlRecord>, DatasetError> {
    let records = read_records(path)?;
    if records.is_empty() {
        return Err(DatasetError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(records)
}

/// Collapses records sharing a `url_id`; the first occurrence wins.
///
/// A later row with the same id but a different `canonical_url` is logged
/// and skipped. Order of the surviving records is preserved.
pub fn dedupe_by_id(records: Vec<UrlRecord>) -> Vec<UrlRecord> {
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut out = Vec::with_capacity(records.len());
    for rec in records {
        match seen.get(&rec.url_id) {
            Some(first_url) => {
                if *first_url != rec.canonical_url {
                    tracing::warn!(
                        url_id = %rec.url_id,
                        kept = %first_url,
                        skipped = %rec.canonical_url,
                        "duplicate url_id for distinct urls; keeping first"
                    );
                }
            }
            None => {
                seen.insert(rec.url_id.clone(), rec.canonical_url.clone());
                out.push(rec);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_tmp(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn reads_all_columns() {
        let f = write_tmp(
            "canonical_url\turl_id\tfull_domain\nhttps://a.test/?x=1,2\tid1\ta.test\n",
        );
        let recs = read_records(f.path()).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].canonical_url, "https://a.test/?x=1,2");
        assert_eq!(recs[0].url_id, "id1");
        assert_eq!(recs[0].full_domain, "a.test");
    }

    #[test]
    fn derives_optional_columns() {
        let f = write_tmp("canonical_url\nhttps://b.test:8080/p?q=\"x\"\n\n");
        let recs = read_records(f.path()).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].canonical_url, "https://b.test:8080/p?q=\"x\"");
        assert_eq!(recs[0].full_domain, "b.test:8080");
        assert_eq!(recs[0].url_id.len(), 16);
    }

    #[test]
    fn missing_url_column_fails_fast() {
        let f = write_tmp("url\turl_id\nhttps://a.test/\t1\n");
        let err = read_records(f.path()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn { column: "canonical_url", .. }));
        assert!(err.to_string().contains("canonical_url"));
    }

    #[test]
    fn comma_separated_header_is_rejected() {
        let f = write_tmp("canonical_url,url_id\nhttps://a.test/,1\n");
        assert!(matches!(
            read_records(f.path()),
            Err(DatasetError::MissingColumn { .. })
        ));
    }

    #[test]
    fn empty_input_is_an_error_when_rows_required() {
        let f = write_tmp("canonical_url\n");
        assert!(read_records(f.path()).unwrap().is_empty());
        assert!(matches!(
            read_nonempty_records(f.path()),
            Err(DatasetError::Empty { .. })
        ));
    }

    #[test]
    fn dedupe_first_occurrence_wins() {
        let recs = vec![
            UrlRecord::new("https://a.test/1", Some("x".into()), None),
            UrlRecord::new("https://a.test/2", Some("x".into()), None),
            UrlRecord::new("https://a.test/3", Some("y".into()), None),
        ];
        let out = dedupe_by_id(recs);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].canonical_url, "https://a.test/1");
        assert_eq!(out[1].url_id, "y");
    }
}
