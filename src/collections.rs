//! Filtering, concatenation and reduction over slices.
//!
//! All helpers borrow their input and never mutate it.

/// Minimum rating kept by [`filter_high_rated`].
pub const HIGH_RATING_THRESHOLD: f64 = 4.0;

/// Something with a title and a rating, e.g. a book.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatableItem {
    pub title: String,
    pub rating: f64,
}

impl RatableItem {
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        Self { title: title.into(), rating }
    }
}

/// Something with a name and a price.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self { name: name.into(), price }
    }
}

/// Items rated at least [`HIGH_RATING_THRESHOLD`], in their original order.
pub fn filter_high_rated(items: &[RatableItem]) -> Vec<RatableItem> {
    items.iter().filter(|item| item.rating >= HIGH_RATING_THRESHOLD).cloned().collect()
}

/// Flatten one level of nesting, keeping the order of slices and of their elements.
///
/// See [`concatenate!`](crate::concatenate!) for the variadic form.
pub fn concatenate<T: Clone>(arrays: &[&[T]]) -> Vec<T> {
    let total = arrays.iter().map(|a| a.len()).sum();
    let mut out = Vec::with_capacity(total);
    for array in arrays {
        out.extend_from_slice(array);
    }
    out
}

/// Owning form of [`concatenate`]; moves elements instead of cloning them.
pub fn concatenate_owned<T, I>(arrays: I) -> Vec<T>
where
    I: IntoIterator<Item = Vec<T>>,
{
    arrays.into_iter().flatten().collect()
}

/// Concatenate any number of slice-like expressions.
///
/// ```rust
/// let joined: Vec<i32> = primer::concatenate!([1, 2], vec![3], [4, 5]);
/// assert_eq!(joined, vec![1, 2, 3, 4, 5]);
/// ```
#[macro_export]
macro_rules! concatenate {
    ($($array:expr),* $(,)?) => {
        $crate::collections::concatenate(&[$(&$array[..]),*])
    };
}

/// The product with the strictly greatest price; the first one wins a tie.
///
/// Returns `None` for an empty slice. A `NaN` price never displaces the current pick.
pub fn most_expensive(products: &[Product]) -> Option<&Product> {
    let (first, rest) = products.split_first()?;
    Some(rest.iter().fold(first, |best, product| {
        if product.price > best.price {
            product
        } else {
            best
        }
    }))
}
