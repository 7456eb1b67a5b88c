//! Structural member access for template sources.
//!
//! A [`Record`] is the structural counterpart of a string-keyed map: a value
//! whose members are fetched by name. Concrete types describe their members
//! once through [`Schema`]; lookups go through a process-wide accessor table
//! built lazily per type, so repeated renders against the same type reuse the
//! same name index.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock};

use super::Value;

/// A structural source exposing named members.
///
/// This trait is typically derived with `#[derive(Record)]`, but can also be
/// implemented manually.
///
/// # Manual implementation
///
/// ```
/// use stencil::{Record, Value};
///
/// struct Task {
///     name: String,
///     priority: u8,
/// }
///
/// impl Record for Task {
///     fn type_name(&self) -> &'static str {
///         "Task"
///     }
///
///     fn member(&self, name: &str) -> Option<Value> {
///         match name {
///             "name" => Some(self.name.clone().into()),
///             "priority" => Some(u32::from(self.priority).into()),
///             _ => None,
///         }
///     }
///
///     fn member_names(&self) -> Vec<&'static str> {
///         vec!["name", "priority"]
///     }
/// }
/// ```
pub trait Record: Send + Sync {
    /// The concrete type's name, used in diagnostics.
    fn type_name(&self) -> &'static str;

    /// Fetch a member by name.
    fn member(&self, name: &str) -> Option<Value>;

    /// The names this record can resolve, used in diagnostics.
    fn member_names(&self) -> Vec<&'static str>;
}

/// A named member accessor within a [`Schema`].
pub struct Field<T> {
    /// Member name as it appears in property paths.
    pub name: &'static str,
    /// Extracts the member's value from an instance.
    pub get: fn(&T) -> Value,
}

/// Static member listing for a concrete [`Record`] type.
///
/// `#[derive(Record)]` generates this; [`resolve_member`] consults it through
/// the cached per-type accessor table.
pub trait Schema: Record + Sized + 'static {
    /// The fields of this type, in declaration order.
    fn schema() -> &'static [Field<Self>];
}

type AccessorTable = HashMap<&'static str, usize>;

/// Process-wide accessor tables, keyed by type identity.
///
/// Append-only and read-mostly. Entries are a pure function of their key, so
/// a race to populate the same type is idempotent and needs no coordination
/// beyond the lock.
static ACCESSOR_TABLES: LazyLock<RwLock<HashMap<TypeId, Arc<AccessorTable>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

fn table_of<T: Schema>() -> Arc<AccessorTable> {
    let key = TypeId::of::<T>();
    if let Some(table) = ACCESSOR_TABLES
        .read()
        .expect("accessor registry lock poisoned")
        .get(&key)
    {
        return Arc::clone(table);
    }

    let table: Arc<AccessorTable> = Arc::new(
        T::schema()
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name, index))
            .collect(),
    );
    let mut tables = ACCESSOR_TABLES
        .write()
        .expect("accessor registry lock poisoned");
    Arc::clone(tables.entry(key).or_insert(table))
}

/// Fetch a member through the cached accessor table for `T`.
///
/// Cached and first-time lookups are indistinguishable: both consult the same
/// schema and produce identical results.
pub fn resolve_member<T: Schema>(item: &T, name: &str) -> Option<Value> {
    let table = table_of::<T>();
    let index = *table.get(name)?;
    Some((T::schema()[index].get)(item))
}

/// The member names declared by `T`'s schema, in declaration order.
pub fn member_names_of<T: Schema>() -> Vec<&'static str> {
    T::schema().iter().map(|field| field.name).collect()
}
