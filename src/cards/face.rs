//! Face identifiers and the face pool.
//!
//! A face is the picture a card shows once revealed; cards match when
//! their faces are equal. The engine only needs the number of faces and a
//! stable index for each. The asset string (an image path, an emoji) is
//! carried along for the presentation layer and never inspected.

use serde::{Deserialize, Serialize};

use crate::core::{MemoError, Result, DEFAULT_FACE_COUNT};

/// Identifier of a face: its position in the `FacePool`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FaceId(pub u32);

impl FaceId {
    /// Create a new face ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Face({})", self.0)
    }
}

/// Ordered, fixed-size catalog of faces.
///
/// Serializes as a plain list of asset names. Deserializing goes through
/// `FacePool::new`, so an empty list is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FacePool {
    assets: Vec<String>,
}

impl FacePool {
    /// Create a pool from asset names. Fails if `assets` is empty.
    pub fn new(assets: Vec<String>) -> Result<Self> {
        if assets.is_empty() {
            return Err(MemoError::EmptyFacePool);
        }
        if u32::try_from(assets.len()).is_err() {
            return Err(MemoError::InvalidConfig(format!(
                "face pool of {} entries is too large",
                assets.len()
            )));
        }
        Ok(Self { assets })
    }

    /// Pool of `count` faces named `"1"`, `"2"`, ...
    pub fn numbered(count: usize) -> Result<Self> {
        Self::new((1..=count).map(|n| n.to_string()).collect())
    }

    /// The shipped image set: `assets/images/1.png` .. `assets/images/32.png`.
    #[must_use]
    pub fn default_images() -> Self {
        Self {
            assets: (1..=DEFAULT_FACE_COUNT)
                .map(|n| format!("assets/images/{n}.png"))
                .collect(),
        }
    }

    /// Number of distinct faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Face at `position`, wrapping around the end of the pool.
    #[must_use]
    pub fn id_at(&self, position: usize) -> FaceId {
        FaceId((position % self.assets.len()) as u32)
    }

    /// Asset for a face, or `None` if the face is not from this pool.
    #[must_use]
    pub fn asset(&self, face: FaceId) -> Option<&str> {
        self.assets.get(face.0 as usize).map(String::as_str)
    }

    /// Does this pool own `face`?
    #[must_use]
    pub fn contains(&self, face: FaceId) -> bool {
        (face.0 as usize) < self.assets.len()
    }

    /// Iterate over all faces in pool order.
    pub fn ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        (0..self.assets.len()).map(|i| FaceId(i as u32))
    }
}

impl TryFrom<Vec<String>> for FacePool {
    type Error = MemoError;

    fn try_from(assets: Vec<String>) -> Result<Self> {
        Self::new(assets)
    }
}

impl From<FacePool> for Vec<String> {
    fn from(pool: FacePool) -> Self {
        pool.assets
    }
}

impl Default for FacePool {
    fn default() -> Self {
        Self::default_images()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_id() {
        let id = FaceId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "Face(5)");
    }

    #[test]
    fn test_empty_pool_rejected() {
        assert!(matches!(FacePool::new(vec![]), Err(MemoError::EmptyFacePool)));
        assert!(matches!(FacePool::numbered(0), Err(MemoError::EmptyFacePool)));
    }

    #[test]
    fn test_default_images() {
        let pool = FacePool::default_images();
        assert_eq!(pool.len(), 32);
        assert_eq!(pool.asset(FaceId::new(0)), Some("assets/images/1.png"));
        assert_eq!(pool.asset(FaceId::new(31)), Some("assets/images/32.png"));
        assert_eq!(pool.asset(FaceId::new(32)), None);
    }

    #[test]
    fn test_id_at_wraps() {
        let pool = FacePool::numbered(3).unwrap();
        assert_eq!(pool.id_at(0), FaceId::new(0));
        assert_eq!(pool.id_at(2), FaceId::new(2));
        assert_eq!(pool.id_at(3), FaceId::new(0));
        assert_eq!(pool.id_at(7), FaceId::new(1));
    }

    #[test]
    fn test_serde_goes_through_new() {
        let pool = FacePool::numbered(3).unwrap();
        let json = serde_json::to_string(&pool).unwrap();
        assert_eq!(json, r#"["1","2","3"]"#);
        assert_eq!(serde_json::from_str::<FacePool>(&json).unwrap(), pool);

        assert!(serde_json::from_str::<FacePool>("[]").is_err());
    }

    #[test]
    fn test_contains_and_ids() {
        let pool = FacePool::numbered(2).unwrap();
        assert!(pool.contains(FaceId::new(1)));
        assert!(!pool.contains(FaceId::new(2)));
        assert_eq!(pool.ids().collect::<Vec<_>>(), vec![FaceId::new(0), FaceId::new(1)]);
    }
}
