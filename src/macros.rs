/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Mapping keys are literals (strings, integers or booleans); any other leaf is
/// an expression converted with [`to_value`](crate::to_value).
///
/// # Examples
///
/// ```rust
/// use serde_yamlite::{yaml, Value};
///
/// let limit = 10;
/// let value = yaml!({
///     "name": "worker",
///     "limits": {"cpu": limit, "burst": null},
///     "ports": [8080, 8443],
///     1: true
/// });
///
/// assert_eq!(value.get("limits").and_then(|l| l.get("cpu")), Some(&Value::Int(10)));
/// assert_eq!(value.to_string(), "{ name: worker, limits: { cpu: 10, burst: null }, ports: [8080, 8443], 1: true }");
/// ```
#[macro_export]
macro_rules! yaml {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Sequence(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Sequence(vec![$($crate::yaml!($elem)),*])
    };

    ({}) => {
        $crate::Value::Mapping($crate::Mapping::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut mapping = $crate::Mapping::new();
        $(
            mapping.insert($crate::Value::from($key), $crate::yaml!($value));
        )*
        $crate::Value::Mapping(mapping)
    }};

    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    };
}
