use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wrapper that serializes its bytes as an uppercase hex string.
///
/// Deserialization accepts either case and rejects odd-length strings.
///
/// ```ignore
/// let json = serde_json::to_string(&HexSerde(vec![0xCA, 0xFE]))?; // "\"CAFE\""
/// let back: HexSerde<Vec<u8>> = serde_json::from_str(&json)?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HexSerde<T>(pub T);

impl<T: AsRef<[u8]>> Serialize for HexSerde<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        as_hex::serialize(&self.0, serializer)
    }
}

impl<'de, T: From<Vec<u8>>> Deserialize<'de> for HexSerde<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        as_hex::deserialize(deserializer).map(HexSerde)
    }
}

/// Field-level helpers for `#[serde(with = "hexcodec::bridges::as_hex")]`.
pub mod as_hex {
    use hexcodec_core::{decode_str, encode_to_string};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize bytes as an uppercase hex string.
    pub fn serialize<T, S>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: AsRef<[u8]> + ?Sized,
        S: Serializer,
    {
        serializer.serialize_str(&encode_to_string(bytes.as_ref()))
    }

    /// Deserialize bytes from a hex string of even length.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: From<Vec<u8>>,
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        if text.len() % 2 != 0 {
            return Err(D::Error::invalid_length(
                text.len(),
                &"an even number of hex digits",
            ));
        }
        decode_str(&text).map(T::from).map_err(D::Error::custom)
    }
}
