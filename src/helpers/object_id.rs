use bson::oid::ObjectId;

/// Ids that are not well-formed can't match a stored document, so callers
/// treat `None` the same as "not found".
pub fn parse_object_id(raw: &str) -> Option<ObjectId> {
    ObjectId::parse_str(raw).ok()
}
