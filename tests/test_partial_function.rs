use optio::*;
use pretty_assertions::assert_eq;

/// Length of a string, treating a missing string as empty. Only defined at "a".
struct StringLength;

impl<'a> PartialFunction<Option<&'a str>, usize> for StringLength {
    fn is_defined_at(&self, value: &Option<&'a str>) -> bool {
        *value == Some("a")
    }

    fn call(&self, value: Option<&'a str>) -> usize {
        value.map_or(0, str::len)
    }
}

#[test]
fn test_is_defined_at() {
    assert!(StringLength.is_defined_at(&Some("a")));
    assert!(!StringLength.is_defined_at(&Some("ab")));
    assert!(!StringLength.is_defined_at(&None));
}

#[test]
fn test_is_defined_at_is_repeatable() {
    let value = Some("a");

    assert_eq!(
        StringLength.is_defined_at(&value),
        StringLength.is_defined_at(&value)
    );
}

#[test]
fn test_apply_inside_domain() {
    assert_eq!(StringLength.apply(Some("a")), Ok(1));
}

#[test]
fn test_apply_outside_domain() {
    assert_eq!(StringLength.apply(Some("abc")), Err(OptionError::NotDefinedAt));
    assert_eq!(StringLength.apply(None), Err(OptionError::NotDefinedAt));
}

#[test]
fn test_call_ignores_guard() {
    assert_eq!(StringLength.call(Some("abc")), 3);
    assert_eq!(StringLength.call(None), 0);
}

#[test]
fn test_collect_through_trait_object() {
    let length: &dyn PartialFunction<Option<&str>, usize> = &StringLength;

    assert_eq!(Opt::of(Some("a")).collect(length), Opt::some(1));
    assert_eq!(Opt::of(Some("b")).collect(length), Opt::none());
}

#[test]
fn test_collect_over_many() {
    let lengths: Vec<Opt<usize>> = [Some("a"), Some("b"), None]
        .into_iter()
        .map(|value| Opt::some(value).collect(&StringLength))
        .collect();

    assert_eq!(lengths, vec![Opt::some(1), Opt::none(), Opt::none()]);
}

#[test]
fn test_guarded_closures() {
    let positive_sqrt = partial(|x: &f64| *x >= 0.0, |x: f64| x.sqrt());

    assert_eq!(positive_sqrt.apply(9.0), Ok(3.0));
    assert_eq!(positive_sqrt.apply(-1.0), Err(OptionError::NotDefinedAt));
    assert_eq!(positive_sqrt.lift(-1.0), Opt::none());
    assert_eq!(positive_sqrt.lift(4.0), Opt::some(2.0));
}

#[test]
fn test_traverse_with_partial_function() {
    let half = partial(|n: &u32| n % 2 == 0, |n: u32| n / 2);

    assert_eq!(Opt::traverse([2, 4, 6], |n| half.lift(n)), Opt::some(vec![1, 2, 3]));
    assert_eq!(Opt::traverse([2, 3, 6], |n| half.lift(n)), Opt::none());
}
