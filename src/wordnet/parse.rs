//! Row parsers for the synset and hypernym tables.
//!
//! Synset rows are `id,noun1 noun2 ...[,gloss]`; the gloss is free text and may
//! itself contain commas. Hypernym rows are `id,parent1,parent2,...`. Blank
//! lines are skipped in both tables. Line numbers in errors are 1-based.

use crate::error::LexiconError;

use super::LexiconResult;

/// One parsed synset row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynsetRow {
    pub line: usize,
    pub id: usize,
    /// The noun field as written, used as the synset's display label.
    pub label: String,
    pub nouns: Vec<String>,
    pub gloss: Option<String>,
}

/// One parsed hypernym row. Ids are kept signed so that range checks happen
/// against the graph, not the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HypernymRow {
    pub line: usize,
    pub id: i64,
    pub parents: Vec<i64>,
}

/// Parse every row of a synset table.
pub fn parse_synsets(text: &str) -> LexiconResult<Vec<SynsetRow>> {
    numbered_lines(text)
        .map(|(line, row)| parse_synset_row(line, row))
        .collect()
}

/// Parse every row of a hypernym table.
pub fn parse_hypernyms(text: &str) -> LexiconResult<Vec<HypernymRow>> {
    numbered_lines(text)
        .map(|(line, row)| parse_hypernym_row(line, row))
        .collect()
}

fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, row)| (i + 1, row.trim_end()))
        .filter(|(_, row)| !row.trim().is_empty())
}

fn parse_synset_row(line: usize, row: &str) -> LexiconResult<SynsetRow> {
    let malformed = |message: String| LexiconError::MalformedRow {
        table: "synset",
        line,
        message,
    };

    let mut fields = row.splitn(3, ',');
    let id_field = fields.next().unwrap_or_default().trim();
    let id: usize = id_field
        .parse()
        .map_err(|_| malformed(format!("invalid synset id \"{id_field}\"")))?;

    let label = fields
        .next()
        .map(str::trim)
        .ok_or_else(|| malformed(format!("synset {id} has no noun field")))?;
    let nouns: Vec<String> = label.split_whitespace().map(str::to_string).collect();
    if nouns.is_empty() {
        return Err(malformed(format!("synset {id} has an empty noun list")));
    }

    Ok(SynsetRow {
        line,
        id,
        label: label.to_string(),
        nouns,
        gloss: fields.next().map(|g| g.trim().to_string()),
    })
}

fn parse_hypernym_row(line: usize, row: &str) -> LexiconResult<HypernymRow> {
    let parse_id = |token: &str| -> LexiconResult<i64> {
        token.parse().map_err(|_| LexiconError::MalformedRow {
            table: "hypernym",
            line,
            message: format!("invalid synset id \"{token}\""),
        })
    };

    let mut fields: Vec<&str> = row.split(',').map(str::trim).collect();
    // One trailing comma is tolerated; any other empty field is not.
    if fields.len() > 1 && fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    let id = parse_id(fields[0])?;
    let parents = fields[1..]
        .iter()
        .map(|token| parse_id(token))
        .collect::<LexiconResult<Vec<_>>>()?;

    Ok(HypernymRow { line, id, parents })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synset_row_with_gloss() {
        let rows = parse_synsets("36,AND_circuit AND_gate,a circuit in a computer").unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.id, 36);
        assert_eq!(row.label, "AND_circuit AND_gate");
        assert_eq!(row.nouns, vec!["AND_circuit", "AND_gate"]);
        assert_eq!(row.gloss.as_deref(), Some("a circuit in a computer"));
    }

    #[test]
    fn gloss_keeps_embedded_commas() {
        let rows = parse_synsets("0,table,flat top, usually with legs").unwrap();
        assert_eq!(rows[0].gloss.as_deref(), Some("flat top, usually with legs"));
    }

    #[test]
    fn gloss_is_optional() {
        let rows = parse_synsets("0,entity\r\n\n1,thing\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].gloss, None);
        assert_eq!(rows[1].line, 3);
        assert_eq!(rows[1].label, "thing");
    }

    #[test]
    fn bad_synset_id_rejected() {
        let err = parse_synsets("0,entity\nx,thing\n").unwrap_err();
        match err {
            LexiconError::MalformedRow { table, line, .. } => {
                assert_eq!(table, "synset");
                assert_eq!(line, 2);
            }
            other => panic!("expected MalformedRow, got {other:?}"),
        }
        assert!(parse_synsets("-1,entity").is_err());
    }

    #[test]
    fn missing_nouns_rejected() {
        assert!(parse_synsets("0").is_err());
        assert!(parse_synsets("0, ,gloss").is_err());
    }

    #[test]
    fn hypernym_rows() {
        let rows = parse_hypernyms("3,1, 2\n4,1,\n0\n").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].id, 3);
        assert_eq!(rows[0].parents, vec![1, 2]);
        assert_eq!(rows[1].parents, vec![1]);
        assert!(rows[2].parents.is_empty());
    }

    #[test]
    fn empty_hypernym_field_rejected() {
        for row in ["2,,1", "2,1,,", ",1"] {
            let err = parse_hypernyms(row).unwrap_err();
            assert!(
                matches!(err, LexiconError::MalformedRow { table: "hypernym", line: 1, .. }),
                "{row}: {err:?}"
            );
        }
    }

    #[test]
    fn hypernym_ids_may_be_negative_until_checked() {
        let rows = parse_hypernyms("1,-1").unwrap();
        assert_eq!(rows[0].parents, vec![-1]);
    }

    #[test]
    fn bad_hypernym_id_rejected() {
        let err = parse_hypernyms("1,0\n2,zero\n").unwrap_err();
        assert!(matches!(
            err,
            LexiconError::MalformedRow {
                table: "hypernym",
                line: 2,
                ..
            }
        ));
    }
}
