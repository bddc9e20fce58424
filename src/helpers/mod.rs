pub(crate) mod aggregate;
pub(crate) mod assoc;
pub(crate) mod flatten;
pub(crate) mod numeric;
pub(crate) mod ordering;
pub(crate) mod predicates;
pub(crate) mod search;
pub(crate) mod set_ops;
pub(crate) mod transform;
