use serde::Deserialize;

/// A catalog entry as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchRecord {
    pub name: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub syllabus: Option<String>,
    pub nb_chapitres: i64,
}

impl SearchRecord {
    /// Cover url, if present and non-empty.
    pub fn cover(&self) -> Option<&str> {
        self.cover.as_deref().filter(|cover| !cover.is_empty())
    }

    /// Syllabus, if present and non-empty.
    pub fn syllabus(&self) -> Option<&str> {
        self.syllabus.as_deref().filter(|syllabus| !syllabus.is_empty())
    }

    pub fn chapters_label(&self) -> String {
        format!("{} chapitres", self.nb_chapitres)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deserialize_search_response() {
        let body = r#"[
            {"name": "One Piece", "cover": "/mangas/One Piece/cover.jpg", "syllabus": "Pirates.", "nb_chapitres": 1100},
            {"name": "Berserk", "cover": null, "nb_chapitres": 374}
        ]"#;

        let records: Vec<SearchRecord> = serde_json::from_str(body).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].cover(), Some("/mangas/One Piece/cover.jpg"));
        assert_eq!(records[0].syllabus(), Some("Pirates."));
        assert_eq!(records[1].cover(), None);
        assert_eq!(records[1].syllabus(), None);
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let record = SearchRecord {
            name: "Akira".to_string(),
            cover: Some("".to_string()),
            syllabus: Some("".to_string()),
            nb_chapitres: 0,
        };

        assert_eq!(record.cover(), None);
        assert_eq!(record.syllabus(), None);
        assert_eq!(record.chapters_label(), "0 chapitres");
    }
}
