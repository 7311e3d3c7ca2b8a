use crate::models::ExamBank;
use include_dir::{Dir, include_dir};
use std::fmt;

static BANK_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/banks");

/// Bank the provider falls back to when an unknown id is requested.
pub const DEFAULT_BANK_ID: &str = "default";

/// The one user-facing failure: no usable bank document, not even the
/// default. Surfaced as a notice on the menu screen.
#[derive(Debug, Clone, PartialEq)]
pub enum BankError {
    NotFound(String),
    Decode { id: String, reason: String },
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankError::NotFound(id) => write!(f, "exam bank '{}' not found", id),
            BankError::Decode { id, reason } => {
                write!(f, "exam bank '{}' is not readable: {}", id, reason)
            }
        }
    }
}

impl std::error::Error for BankError {}

/// Identifier/title pair for the menu list.
#[derive(Debug, Clone, PartialEq)]
pub struct BankSummary {
    pub id: String,
    pub title: String,
}

/// Lists the bundled banks in menu order: the default bank first, the rest
/// sorted by id. Banks that fail to decode are skipped here; `load_bank`
/// reports them if actually requested.
pub fn list_banks() -> Vec<BankSummary> {
    let mut ids: Vec<String> = BANK_DIR
        .files()
        .filter_map(|f| {
            let path = f.path();
            if path.extension()? != "json" {
                return None;
            }
            Some(path.file_stem()?.to_string_lossy().to_string())
        })
        .collect();

    ids.sort();
    if let Some(pos) = ids.iter().position(|id| id == DEFAULT_BANK_ID)
        && pos != 0
    {
        let default = ids.remove(pos);
        ids.insert(0, default);
    }

    ids.into_iter()
        .filter_map(|id| {
            let bank = decode_bank(&id).ok()?;
            Some(BankSummary {
                id,
                title: bank.title,
            })
        })
        .collect()
}

/// Loads a bank by id, falling back to the default bank when the id is
/// unrecognized. Only errors when even the default bank is unavailable.
pub fn load_bank(id: &str) -> Result<ExamBank, BankError> {
    match decode_bank(id) {
        Ok(bank) => Ok(bank),
        Err(BankError::NotFound(_)) if id != DEFAULT_BANK_ID => decode_bank(DEFAULT_BANK_ID),
        Err(e) => Err(e),
    }
}

fn decode_bank(id: &str) -> Result<ExamBank, BankError> {
    let file = BANK_DIR
        .get_file(format!("{id}.json"))
        .ok_or_else(|| BankError::NotFound(id.to_string()))?;

    let contents = file.contents_utf8().ok_or_else(|| BankError::Decode {
        id: id.to_string(),
        reason: "not valid UTF-8".to_string(),
    })?;

    let mut bank: ExamBank = serde_json::from_str(contents).map_err(|e| BankError::Decode {
        id: id.to_string(),
        reason: e.to_string(),
    })?;

    if bank.questions.is_empty() {
        return Err(BankError::Decode {
            id: id.to_string(),
            reason: "bank has no questions".to_string(),
        });
    }

    bank.id = id.to_string();
    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bank_is_listed_first() {
        let banks = list_banks();
        assert!(!banks.is_empty());
        assert_eq!(banks[0].id, DEFAULT_BANK_ID);
        assert!(!banks[0].title.is_empty());
    }

    #[test]
    fn all_bundled_banks_are_present() {
        let ids: Vec<String> = list_banks().into_iter().map(|b| b.id).collect();
        for expected in ["default", "crud", "querying", "aggregation"] {
            assert!(ids.iter().any(|id| id == expected), "missing {expected}");
        }
    }

    #[test]
    fn load_bank_by_id() {
        let bank = load_bank("crud").unwrap();
        assert_eq!(bank.id, "crud");
        assert!(!bank.questions.is_empty());
        for q in &bank.questions {
            assert!(
                q.options.iter().any(|o| o.label == q.answer),
                "answer key of question {} must name one of its options",
                q.id
            );
        }
    }

    #[test]
    fn unknown_id_falls_back_to_default() {
        let bank = load_bank("nonexistent-id").unwrap();
        assert_eq!(bank.id, DEFAULT_BANK_ID);
    }

    #[test]
    fn fallback_leaves_listing_unaffected() {
        let before = list_banks();
        let _ = load_bank("nonexistent-id").unwrap();
        assert_eq!(before, list_banks());
    }

    #[test]
    fn every_bank_decodes() {
        for summary in list_banks() {
            let bank = load_bank(&summary.id).unwrap();
            assert_eq!(bank.id, summary.id);
            assert_eq!(bank.title, summary.title);
        }
    }

    #[test]
    fn option_labels_are_unique_within_each_question() {
        for summary in list_banks() {
            let bank = load_bank(&summary.id).unwrap();
            for q in &bank.questions {
                let mut labels: Vec<&str> = q.options.iter().map(|o| o.label.as_str()).collect();
                labels.sort();
                labels.dedup();
                assert_eq!(labels.len(), q.options.len(), "bank {} q {}", bank.id, q.id);
            }
        }
    }

    #[test]
    fn bank_error_display() {
        let e = BankError::NotFound("x".to_string());
        assert_eq!(e.to_string(), "exam bank 'x' not found");
    }
}
