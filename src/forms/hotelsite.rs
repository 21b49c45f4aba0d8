use crate::models;
use bson::{oid::ObjectId, Bson, Document};
use serde::Deserialize;
use serde_valid::Validate;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HotelsiteForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub name: String,
    #[validate(min_length = 1)]
    #[validate(max_length = 5000)]
    pub description: String,
    pub image: Option<String>,
    #[validate(max_length = 200)]
    pub city: Option<String>,
    #[validate(minimum = 0.0)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub featured: bool,
}

impl From<HotelsiteForm> for models::Hotelsite {
    fn from(form: HotelsiteForm) -> Self {
        let mut hotelsite = models::Hotelsite::new(form.name, form.description);
        hotelsite.image = form.image;
        hotelsite.city = form.city;
        hotelsite.cost = form.cost;
        hotelsite.featured = form.featured;
        hotelsite
    }
}

/// Field-level merge: only the fields present in the body are written.
/// Unknown fields and `comments` are ignored.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct HotelsitePatch {
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub name: Option<String>,
    #[validate(min_length = 1)]
    #[validate(max_length = 5000)]
    pub description: Option<String>,
    pub image: Option<String>,
    #[validate(max_length = 200)]
    pub city: Option<String>,
    #[validate(minimum = 0.0)]
    pub cost: Option<f64>,
    pub featured: Option<bool>,
}

impl HotelsitePatch {
    /// The `$set` document, always stamping `updated_at`.
    pub fn into_document(self) -> Document {
        let mut fields = Document::new();
        if let Some(name) = self.name {
            fields.insert("name", name);
        }
        if let Some(description) = self.description {
            fields.insert("description", description);
        }
        if let Some(image) = self.image {
            fields.insert("image", image);
        }
        if let Some(city) = self.city {
            fields.insert("city", city);
        }
        if let Some(cost) = self.cost {
            fields.insert("cost", cost);
        }
        if let Some(featured) = self.featured {
            fields.insert("featured", featured);
        }
        fields.insert("updated_at", bson::DateTime::from_chrono(models::now()));
        fields
    }
}

/// Query-by-example from the query string. Values are cast to the stored
/// type of known fields; anything else is compared as a string.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(transparent)]
pub struct HotelsiteFilter(pub HashMap<String, String>);

impl HotelsiteFilter {
    pub fn into_document(self) -> Result<Document, String> {
        let mut filter = Document::new();
        for (key, raw) in self.0 {
            if key.split('.').any(|segment| segment.starts_with('$')) {
                return Err(format!("Unsupported filter key {}", key));
            }
            let value = match key.as_str() {
                "featured" => raw
                    .parse::<bool>()
                    .map(Bson::Boolean)
                    .map_err(|_| format!("featured must be true or false, got {}", raw))?,
                "cost" => raw
                    .parse::<f64>()
                    .map(Bson::Double)
                    .map_err(|_| format!("cost must be a number, got {}", raw))?,
                "_id" => ObjectId::parse_str(&raw)
                    .map(Bson::ObjectId)
                    .map_err(|_| format!("_id must be an object id, got {}", raw))?,
                _ => Bson::String(raw),
            };
            filter.insert(key, value);
        }
        Ok(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(pairs: &[(&str, &str)]) -> HotelsiteFilter {
        HotelsiteFilter(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn filter_casts_known_fields() {
        let document = filter(&[("featured", "true"), ("cost", "80"), ("city", "Porto")])
            .into_document()
            .unwrap();

        assert_eq!(document.get("featured"), Some(&Bson::Boolean(true)));
        assert_eq!(document.get("cost"), Some(&Bson::Double(80.0)));
        assert_eq!(document.get("city"), Some(&Bson::String("Porto".into())));
    }

    #[test]
    fn filter_rejects_uncastable_values() {
        assert!(filter(&[("featured", "yes")]).into_document().is_err());
        assert!(filter(&[("cost", "cheap")]).into_document().is_err());
        assert!(filter(&[("_id", "nope")]).into_document().is_err());
    }

    #[test]
    fn filter_rejects_operator_keys() {
        let err = filter(&[("$where", "sleep(1000)")])
            .into_document()
            .unwrap_err();
        assert_eq!(err, "Unsupported filter key $where");
        assert!(filter(&[("$expr", "1")]).into_document().is_err());
        assert!(filter(&[("comments.$id", "x")]).into_document().is_err());
        assert!(filter(&[("city", "$Porto")]).into_document().is_ok());
    }

    #[test]
    fn empty_filter_is_empty_document() {
        assert!(HotelsiteFilter::default().into_document().unwrap().is_empty());
    }

    #[test]
    fn patch_only_sets_present_fields() {
        let patch: HotelsitePatch =
            serde_json::from_str(r#"{"featured": true, "comments": [], "owner": "x"}"#).unwrap();
        let document = patch.into_document();

        assert_eq!(document.get("featured"), Some(&Bson::Boolean(true)));
        assert!(document.get("name").is_none());
        assert!(document.get("comments").is_none());
        assert!(document.get("owner").is_none());
        assert!(document.get("updated_at").is_some());
    }

    #[test]
    fn form_validation() {
        let form: HotelsiteForm =
            serde_json::from_str(r#"{"name": "", "description": "d", "cost": -1}"#).unwrap();
        assert!(form.validate().is_err());

        let form: HotelsiteForm =
            serde_json::from_str(r#"{"name": "Inn", "description": "d", "cost": 99.5}"#).unwrap();
        assert!(form.validate().is_ok());
        let hotelsite: models::Hotelsite = form.into();
        assert_eq!(hotelsite.cost, Some(99.5));
        assert!(!hotelsite.featured);
    }
}
