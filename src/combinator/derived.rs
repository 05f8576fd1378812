//! Combinators derived from the traversal and reduction primitives.
//!
//! Nothing here loops on its own: every function is a single call to
//! [`each`] or [`reduce`], possibly by way of another combinator.

use crate::collection::{Each, Key, Receiver, Record, Truthy, each, reduce};

use super::InvokeError;

/// Returns the results of applying `function` to each element.
///
/// The output has the same length and order as the traversal of
/// `collection`.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::map;
///
/// let doubled = map(&[1, 2, 3], |value, _, _| value * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
///
/// let positions = map(&["a", "b"], |_, key, _| key.as_index());
/// assert_eq!(positions, vec![Some(0), Some(1)]);
/// ```
pub fn map<C, R, F>(collection: &C, mut function: F) -> Vec<R>
where
    C: Each + ?Sized,
    F: FnMut(&C::Item, Key<'_>, &C) -> R,
{
    let mut mapped = Vec::with_capacity(collection.length());
    each(collection, |value, key, whole| {
        mapped.push(function(value, key, whole));
    });
    mapped
}

/// Returns the elements that pass `predicate`, in traversal order.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::filter;
///
/// let evens = filter(&[1, 2, 3, 4, 5, 6], |value| value % 2 == 0);
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub fn filter<C, P>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Each + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    let mut passed = Vec::new();
    each(collection, |value, _, _| {
        if predicate(value) {
            passed.push(value.clone());
        }
    });
    passed
}

/// Returns the elements that fail `predicate`, in traversal order.
///
/// This is [`filter`] with the predicate negated.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::reject;
///
/// let odds = reject(&[1, 2, 3, 4, 5, 6], |value| value % 2 == 0);
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub fn reject<C, P>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Each + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    filter(collection, |value| !predicate(value))
}

/// Returns a duplicate-free copy of `collection`, keeping first occurrences
/// in the order they were seen.
///
/// Elements are compared with `==` against everything kept so far, so this
/// is quadratic in the number of distinct elements. The element type only
/// needs [`PartialEq`]; it does not have to be hashable or ordered.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::uniq;
///
/// assert_eq!(uniq(&[1, 2, 1, 3, 2]), vec![1, 2, 3]);
/// ```
pub fn uniq<C>(collection: &C) -> Vec<C::Item>
where
    C: Each + ?Sized,
    C::Item: Clone + PartialEq,
{
    reduce(
        collection,
        |mut seen: Vec<C::Item>, value| {
            if !contains(&seen, value) {
                seen.push(value.clone());
            }
            seen
        },
        Vec::new(),
    )
}

/// Returns whether any element equals `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Collection;
/// use underbar::combinator::contains;
///
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains(&Collection::mapping([("a", 1)]), &2));
/// ```
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Each + ?Sized,
    C::Item: PartialEq,
{
    reduce(
        collection,
        |was_found, item| was_found || item == target,
        false,
    )
}

/// Returns whether every element passes `predicate`.
///
/// Always `true` for an empty collection. Once an element fails, the
/// predicate is no longer consulted for the remaining ones.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::every;
///
/// assert!(every(&[2, 4, 6], |value| value % 2 == 0));
/// assert!(!every(&[2, 3, 6], |value| value % 2 == 0));
///
/// let empty: [i32; 0] = [];
/// assert!(every(&empty, |_| false));
/// ```
pub fn every<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Each + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    reduce(
        collection,
        |all_passed, item| all_passed && predicate(item),
        true,
    )
}

/// Returns whether at least one element passes `predicate`.
///
/// Always `false` for an empty collection. Once an element passes, the
/// predicate is no longer consulted for the remaining ones.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::some;
///
/// assert!(!some(&[1, 3, 5], |value| value % 2 == 0));
/// assert!(some(&[1, 4, 5], |value| value % 2 == 0));
///
/// let empty: [i32; 0] = [];
/// assert!(!some(&empty, |_| true));
/// ```
pub fn some<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Each + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    reduce(
        collection,
        |any_passed, item| any_passed || predicate(item),
        false,
    )
}

/// [`every`] with the identity predicate: whether every element is truthy.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::every_truthy;
///
/// assert!(every_truthy(&[1, 2, 3]));
/// assert!(!every_truthy(&[Some(1), None]));
/// ```
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Each + ?Sized,
    C::Item: Truthy,
{
    every(collection, |item| super::identity(item).is_truthy())
}

/// [`some`] with the identity predicate: whether any element is truthy.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::some_truthy;
///
/// assert!(some_truthy(&["", "x"]));
/// assert!(!some_truthy(&[0, 0]));
/// ```
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Each + ?Sized,
    C::Item: Truthy,
{
    some(collection, |item| super::identity(item).is_truthy())
}

/// Extracts the property called `name` from every element.
///
/// Elements without the property contribute `None`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Collection;
/// use underbar::combinator::pluck;
///
/// let people = vec![
///     Collection::mapping([("name", "moe"), ("age", "40")]),
///     Collection::mapping([("name", "curly")]),
/// ];
///
/// assert_eq!(pluck(&people, "age"), vec![Some("40"), None]);
/// ```
pub fn pluck<C>(collection: &C, name: &str) -> Vec<Option<<C::Item as Record>::Value>>
where
    C: Each + ?Sized,
    C::Item: Record,
    <C::Item as Record>::Value: Clone,
{
    map(collection, |item, _, _| item.property(name).cloned())
}

/// Calls `function` on every element with `arguments`.
///
/// The element is the receiver: it is passed as the first parameter of each
/// call, followed by the same `arguments` every time.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::invoke;
///
/// let totals = invoke(&[1_i32, 2], |value, extra: &[i32]| value + extra.iter().sum::<i32>(), &[10, 20]);
/// assert_eq!(totals, vec![31, 32]);
/// ```
pub fn invoke<C, A, R, F>(collection: &C, mut function: F, arguments: &[A]) -> Vec<R>
where
    C: Each + ?Sized,
    F: FnMut(&C::Item, &[A]) -> R,
{
    map(collection, |item, _, _| function(item, arguments))
}

/// Calls the operation named `name` on every element with `arguments`.
///
/// Each element resolves `name` through its [`Receiver`] implementation and
/// runs it on itself. If any element does not expose `name`, the whole call
/// fails with [`InvokeError::UnknownMethod`] naming the first such element.
///
/// # Errors
///
/// Returns [`InvokeError::UnknownMethod`] when an element has no operation
/// called `name`.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::invoke_method;
///
/// let words = vec![String::from("dog"), String::from("cat")];
/// let shouted = invoke_method::<_, usize>(&words, "to_uppercase", &[]).unwrap();
/// assert_eq!(shouted, vec!["DOG", "CAT"]);
///
/// let sliced = invoke_method(&words, "slice", &[0_usize, 2]).unwrap();
/// assert_eq!(sliced, vec!["do", "ca"]);
///
/// assert!(invoke_method::<_, usize>(&words, "explode", &[]).is_err());
/// ```
pub fn invoke_method<C, A>(
    collection: &C,
    name: &str,
    arguments: &[A],
) -> Result<Vec<<C::Item as Receiver<A>>::Output>, InvokeError>
where
    C: Each + ?Sized,
    C::Item: Receiver<A>,
{
    map(collection, |item, key, _| {
        item.call_method(name, arguments)
            .ok_or_else(|| InvokeError::unknown_method(key, name))
    })
    .into_iter()
    .collect()
}
