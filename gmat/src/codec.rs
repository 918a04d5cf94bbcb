//! Serde support: a matrix is encoded as its nested rows
//!
//! `[[1, 2], [3, 4]]` is the 2x2 matrix with row-major values 1, 2, 3, 4.
//! Decoding goes through [`Matrix::from_rows`], so ragged input is rejected.

use crate::Matrix;
use serde::de::Error as _;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<E: Serialize> Serialize for Matrix<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.rows))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

impl<'de, E: Deserialize<'de>> Deserialize<'de> for Matrix<E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<E>>::deserialize(deserializer)?;
        Matrix::from_rows(rows).map_err(D::Error::custom)
    }
}
