//! Entity records mirroring the lore API's JSON shapes.
//!
//! Field names follow the wire format (`camelCase`, `_id` for identifiers).
//! Everything except `_id` and `name`/`dialog` is optional upstream; absent
//! fields decode to `None` rather than failing.

use crate::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiki_url: Option<String>,
}

/// A line of film dialog. `movie` and `character` are opaque id references;
/// resolving them is the caller's concern (see the fan-out pattern, which
/// treats movie ids as join keys).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub dialog: String,
    pub movie: EntityId,
    pub character: EntityId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub chapter_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_in_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_in_millions: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_office_revenue_in_millions: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academy_award_nominations: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academy_award_wins: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotten_tomatoes_score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::{Book, Chapter, Character, Movie, Quote};
    use pretty_assertions::assert_eq;

    #[test]
    fn book_decodes_and_ignores_unknown_keys() {
        let json = r#"{"_id": "b1", "name": "The Fellowship of the Ring", "isbn": "n/a"}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id.as_str(), "b1");
        assert_eq!(book.name, "The Fellowship of the Ring");
    }

    #[test]
    fn book_missing_id_is_a_decode_error() {
        let json = r#"{"name": "The Two Towers"}"#;
        assert!(serde_json::from_str::<Book>(json).is_err());
    }

    #[test]
    fn book_empty_id_is_a_decode_error() {
        let json = r#"{"_id": "", "name": "The Two Towers"}"#;
        assert!(serde_json::from_str::<Book>(json).is_err());
    }

    #[test]
    fn character_optional_fields_decode_to_none() {
        let json = r#"{"_id": "c1", "name": "Gandalf"}"#;
        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.name, "Gandalf");
        assert_eq!(character.race, None);
        assert_eq!(character.wiki_url, None);
    }

    #[test]
    fn character_wire_names_are_camel_case() {
        let json = r#"{"_id": "c2", "name": "Galadriel", "wikiUrl": "http://lotr.wikia.com/wiki/Galadriel"}"#;
        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(
            character.wiki_url.as_deref(),
            Some("http://lotr.wikia.com/wiki/Galadriel")
        );
    }

    #[test]
    fn quote_references_stay_opaque() {
        let json = r#"{"_id": "q1", "dialog": "Fly, you fools!", "movie": "m1", "character": "c1"}"#;
        let quote: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.movie.as_str(), "m1");
        assert_eq!(quote.character.as_str(), "c1");
    }

    #[test]
    fn chapter_book_reference_is_optional() {
        let json = r#"{"_id": "ch1", "chapterName": "A Long-expected Party"}"#;
        let chapter: Chapter = serde_json::from_str(json).unwrap();
        assert_eq!(chapter.chapter_name, "A Long-expected Party");
        assert_eq!(chapter.book, None);
    }

    #[test]
    fn movie_numeric_fields_are_nullable() {
        let json = r#"{
            "_id": "m1",
            "name": "The Return of the King",
            "runtimeInMinutes": 201,
            "rottenTomatoesScore": 93.0,
            "budgetInMillions": null
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.runtime_in_minutes, Some(201));
        assert_eq!(movie.rotten_tomatoes_score, Some(93.0));
        assert_eq!(movie.budget_in_millions, None);
        assert_eq!(movie.academy_award_wins, None);
    }

    #[test]
    fn movie_round_trips_to_an_equal_value() {
        let json = r#"{
            "_id": "m2",
            "name": "The Two Towers",
            "runtimeInMinutes": 179,
            "academyAwardNominations": 6,
            "academyAwardWins": 2
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        let encoded = serde_json::to_string(&movie).unwrap();
        let decoded: Movie = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, movie);
    }

    #[test]
    fn character_round_trips_to_an_equal_value() {
        let json = r#"{
            "_id": "c3",
            "name": "Samwise Gamgee",
            "race": "Hobbit",
            "spouse": "Rosie Cotton"
        }"#;
        let character: Character = serde_json::from_str(json).unwrap();
        let encoded = serde_json::to_string(&character).unwrap();
        let decoded: Character = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, character);
    }

    #[test]
    fn chapter_round_trips_to_an_equal_value() {
        let json = r#"{"_id": "ch3", "chapterName": "Three is Company", "book": "b1"}"#;
        let chapter: Chapter = serde_json::from_str(json).unwrap();
        let encoded = serde_json::to_string(&chapter).unwrap();
        let decoded: Chapter = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, chapter);
    }

    #[test]
    fn quote_round_trips_to_an_equal_value() {
        let quote = Quote {
            id: "q9".to_string().try_into().unwrap(),
            dialog: "You shall not pass!".to_string(),
            movie: "m1".to_string().try_into().unwrap(),
            character: "c1".to_string().try_into().unwrap(),
        };
        let encoded = serde_json::to_string(&quote).unwrap();
        let decoded: Quote = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, quote);
    }
}
