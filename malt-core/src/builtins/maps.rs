// malt-core - Map built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Maps: hash-map, assoc, dissoc, get, contains?, keys, vals, map?

use malt_parser::{MaltVal, OrdMap};

use crate::error::{AritySpec, Error, Result, check_arity};

fn map_arg<'a>(name: &str, val: &'a MaltVal) -> Result<&'a OrdMap<MaltVal, MaltVal>> {
    match val {
        MaltVal::Map(m, _) => Ok(m),
        other => Err(Error::type_error(name, "map", other.type_name())),
    }
}

/// Insert key/value pairs into `map`, failing on an odd count.
fn insert_pairs(
    name: &str,
    mut map: OrdMap<MaltVal, MaltVal>,
    kvs: &[MaltVal],
) -> Result<OrdMap<MaltVal, MaltVal>> {
    if kvs.len() % 2 != 0 {
        return Err(Error::InvalidArgument(format!(
            "{}: expected an even number of key/value arguments",
            name
        )));
    }
    for pair in kvs.chunks(2) {
        map.insert(pair[0].clone(), pair[1].clone());
    }
    Ok(map)
}

/// (hash-map & kvs)
pub(crate) fn builtin_hash_map(args: &[MaltVal]) -> Result<MaltVal> {
    let map = insert_pairs("hash-map", OrdMap::new(), args)?;
    Ok(MaltVal::Map(map, None))
}

pub(crate) fn builtin_map_p(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("map?", AritySpec::Exact(1), args)?;
    Ok(MaltVal::bool(matches!(args[0], MaltVal::Map(..))))
}

/// (assoc m & kvs) - a new map with the pairs added
pub(crate) fn builtin_assoc(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("assoc", AritySpec::AtLeast(1), args)?;
    let map = map_arg("assoc", &args[0])?.clone();
    Ok(MaltVal::Map(insert_pairs("assoc", map, &args[1..])?, None))
}

/// (dissoc m & ks) - a new map without the keys
pub(crate) fn builtin_dissoc(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("dissoc", AritySpec::AtLeast(1), args)?;
    let mut map = map_arg("dissoc", &args[0])?.clone();
    for key in &args[1..] {
        map.remove(key);
    }
    Ok(MaltVal::Map(map, None))
}

/// (get m k) - nil for a missing key or a nil map
pub(crate) fn builtin_get(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("get", AritySpec::Exact(2), args)?;
    if args[0].is_nil() {
        return Ok(MaltVal::Nil);
    }
    Ok(map_arg("get", &args[0])?
        .get(&args[1])
        .cloned()
        .unwrap_or(MaltVal::Nil))
}

pub(crate) fn builtin_contains_p(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("contains?", AritySpec::Exact(2), args)?;
    Ok(MaltVal::bool(
        map_arg("contains?", &args[0])?.contains_key(&args[1]),
    ))
}

pub(crate) fn builtin_keys(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("keys", AritySpec::Exact(1), args)?;
    Ok(MaltVal::list(map_arg("keys", &args[0])?.keys().cloned().collect()))
}

pub(crate) fn builtin_vals(args: &[MaltVal]) -> Result<MaltVal> {
    check_arity("vals", AritySpec::Exact(1), args)?;
    Ok(MaltVal::list(
        map_arg("vals", &args[0])?.values().cloned().collect(),
    ))
}
