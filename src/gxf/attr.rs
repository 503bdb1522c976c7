use crate::error::MalformedKind;
use hashbrown::HashMap;

/// Attribute syntax of column 9.
///
/// GFF3 writes `key=value` pairs, GTF writes `key "value"` pairs with a
/// single space of padding after each `;`. Everything else about the nine
/// columns is shared between the two formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Gff,
    Gtf,
}

/// Parses the attribute column into a key -> raw value map.
///
/// Values are stored as written, so a multi-valued attribute like
/// `tag=appris,basic,CCDS` keeps its commas. Empty segments (trailing `;`)
/// are skipped. Duplicate keys: last occurrence wins.
pub(crate) fn parse_attributes(
    raw: &str,
    dialect: Dialect,
) -> Result<HashMap<String, String>, MalformedKind> {
    let mut attributes = HashMap::new();

    for segment in raw.split(';') {
        let (key, value) = match dialect {
            Dialect::Gff => {
                if segment.is_empty() {
                    continue;
                }
                segment
                    .split_once('=')
                    .ok_or_else(|| MalformedKind::Attribute(segment.to_string()))?
            }
            Dialect::Gtf => {
                let segment = segment.trim_start_matches(' ');
                if segment.is_empty() {
                    continue;
                }
                let (key, value) = segment
                    .split_once(' ')
                    .ok_or_else(|| MalformedKind::Attribute(segment.to_string()))?;
                (key, value.trim_start_matches(' ').trim_matches('"'))
            }
        };
        attributes.insert(key.to_string(), value.to_string());
    }

    Ok(attributes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gff() {
        let raw = "ID=ENSG00000223972.5;gene_type=transcribed_unprocessed_pseudogene;level=2";
        let attributes = parse_attributes(raw, Dialect::Gff).unwrap();
        assert_eq!(attributes["ID"], "ENSG00000223972.5");
        assert_eq!(attributes["gene_type"], "transcribed_unprocessed_pseudogene");
        assert_eq!(attributes["level"], "2");
    }

    #[test]
    fn test_parse_gtf() {
        let raw = "gene_id \"ENSG00000223972\"; gene_name \"DDX11L1\"; level 2; havana_gene OTTHUMG00000000961.1;";
        let attributes = parse_attributes(raw, Dialect::Gtf).unwrap();
        assert_eq!(attributes["gene_id"], "ENSG00000223972");
        assert_eq!(attributes["gene_name"], "DDX11L1");
        assert_eq!(attributes["level"], "2");
        assert_eq!(attributes["havana_gene"], "OTTHUMG00000000961.1");
    }

    #[test]
    fn test_multi_value_kept_raw() {
        let attributes = parse_attributes("tag=appris,basic,CCDS", Dialect::Gff).unwrap();
        assert_eq!(attributes["tag"], "appris,basic,CCDS");
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let attributes = parse_attributes("ID=first;ID=second", Dialect::Gff).unwrap();
        assert_eq!(attributes["ID"], "second");
        assert_eq!(attributes.len(), 1);
    }

    #[test]
    fn test_trailing_semicolon() {
        let attributes = parse_attributes("ID=tx1;", Dialect::Gff).unwrap();
        assert_eq!(attributes.len(), 1);
    }

    #[test]
    fn test_missing_separator() {
        let err = parse_attributes("ID=tx1;orphan", Dialect::Gff).unwrap_err();
        assert_eq!(err, MalformedKind::Attribute("orphan".to_string()));
    }

    #[test]
    fn test_value_with_equals() {
        // only the first '=' separates key from value
        let attributes = parse_attributes("note=a=b", Dialect::Gff).unwrap();
        assert_eq!(attributes["note"], "a=b");
    }
}
