use crate::treap::implicit_tree;
use crate::treap::iter::Iter;
use crate::treap::list::Treap;
use crate::treap::node::Tree;
use crate::treap::persistent::PersistentTreap;
use crate::treap::summary::Summary;
use crate::treap::Result;
use serde::de::{Deserialize, DeserializeOwned, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::cmp;
use std::fmt;
use std::io::{Read, Write};
use std::marker::PhantomData;

fn serialize_tree<T, S, V>(tree: &Tree<T, S>, serializer: V) -> std::result::Result<V::Ok, V::Error>
where
    T: Serialize,
    V: Serializer,
{
    let len = implicit_tree::len(tree);
    let mut seq = serializer.serialize_seq(Some(len))?;
    for value in Iter::new(tree, len) {
        seq.serialize_element(value)?;
    }
    seq.end()
}

struct TreeVisitor<T, S> {
    marker: PhantomData<fn() -> Tree<T, S>>,
}

impl<'de, T, S> Visitor<'de> for TreeVisitor<T, S>
where
    T: Deserialize<'de>,
    S: Summary<T>,
{
    type Value = Tree<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        // The length prefix is untrusted input.
        let mut values = Vec::with_capacity(cmp::min(seq.size_hint().unwrap_or(0), 4096));
        while let Some(value) = seq.next_element()? {
            values.push(value);
        }
        let len = values.len();
        Ok(implicit_tree::build(&mut values.into_iter(), len))
    }
}

fn deserialize_tree<'de, T, S, D>(deserializer: D) -> std::result::Result<Tree<T, S>, D::Error>
where
    T: Deserialize<'de>,
    S: Summary<T>,
    D: Deserializer<'de>,
{
    deserializer.deserialize_seq(TreeVisitor {
        marker: PhantomData,
    })
}

impl<T, S> Serialize for Treap<T, S>
where
    T: Serialize,
{
    fn serialize<V>(&self, serializer: V) -> std::result::Result<V::Ok, V::Error>
    where
        V: Serializer,
    {
        serialize_tree(self.tree(), serializer)
    }
}

impl<'de, T, S> Deserialize<'de> for Treap<T, S>
where
    T: Deserialize<'de>,
    S: Summary<T>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_tree(deserializer).map(Treap::from_tree)
    }
}

impl<T, S> Serialize for PersistentTreap<T, S>
where
    T: Serialize,
{
    fn serialize<V>(&self, serializer: V) -> std::result::Result<V::Ok, V::Error>
    where
        V: Serializer,
    {
        serialize_tree(self.tree(), serializer)
    }
}

impl<'de, T, S> Deserialize<'de> for PersistentTreap<T, S>
where
    T: Deserialize<'de>,
    S: Summary<T>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_tree(deserializer).map(PersistentTreap::from_tree)
    }
}

macro_rules! impl_encoding {
    ($type_name:ident) => {
        impl<T, S> $type_name<T, S>
        where
            T: Serialize + DeserializeOwned,
            S: Summary<T>,
        {
            /// Encodes the list with bincode.
            pub fn to_bytes(&self) -> Result<Vec<u8>> {
                let bytes = bincode::serialize(self)?;
                log::debug!(
                    "encoded {} of {} values into {} bytes",
                    stringify!($type_name),
                    self.len(),
                    bytes.len(),
                );
                Ok(bytes)
            }

            /// Decodes a list previously encoded with `to_bytes`.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                let ret: Self = bincode::deserialize(bytes)?;
                log::debug!(
                    "decoded {} of {} values from {} bytes",
                    stringify!($type_name),
                    ret.len(),
                    bytes.len(),
                );
                Ok(ret)
            }

            /// Encodes the list with bincode into `writer`.
            pub fn write_to<W>(&self, mut writer: W) -> Result<()>
            where
                W: Write,
            {
                bincode::serialize_into(&mut writer, self)?;
                writer.flush()?;
                log::debug!("wrote {} of {} values", stringify!($type_name), self.len());
                Ok(())
            }

            /// Decodes a list previously encoded with `write_to` from `reader`.
            pub fn read_from<R>(reader: R) -> Result<Self>
            where
                R: Read,
            {
                let ret: Self = bincode::deserialize_from(reader)?;
                log::debug!("read {} of {} values", stringify!($type_name), ret.len());
                Ok(ret)
            }
        }
    };
}

impl_encoding!(Treap);
impl_encoding!(PersistentTreap);
