//! Declarative schema construction macros.

/// Builds an [`ObjectValidator`](crate::combinators::ObjectValidator) from
/// `"field" => validator` pairs.
///
/// # Examples
///
/// ```rust,ignore
/// let user = schema! {
///     "name" => string().min(1),
///     "age" => number().min(0.0).optional(),
/// };
/// ```
#[macro_export]
macro_rules! schema {
    ( $( $name:expr => $validator:expr ),* $(,)? ) => {
        $crate::combinators::object()
            $( .field($name, $validator) )*
    };
}

/// Builds a [`UnionValidator`](crate::combinators::UnionValidator) from a
/// list of members, tried in order.
///
/// # Examples
///
/// ```rust,ignore
/// let id = any_of![string().uuid(), number().int()];
/// ```
#[macro_export]
macro_rules! any_of {
    ( $( $validator:expr ),+ $(,)? ) => {
        $crate::combinators::union()
            $( .member($validator) )+
    };
}

/// Builds an [`IntersectionValidator`](crate::combinators::IntersectionValidator)
/// from a list of members, each seeing the previous member's output.
///
/// # Examples
///
/// ```rust,ignore
/// let name = all_of![string().trim(), string().min(3)];
/// ```
#[macro_export]
macro_rules! all_of {
    ( $( $validator:expr ),+ $(,)? ) => {
        $crate::combinators::intersection()
            $( .member($validator) )+
    };
}
