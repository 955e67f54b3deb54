//! Render guard with a custom equality predicate.
//!
//! A cache of one: the guard keeps the last props and the last output. On
//! each render it asks the comparator whether `(previous, next)` are equal;
//! if so the cached output is returned and the wrapped component is not
//! rendered at all.

use super::Component;

pub struct Memo<C, F>
where
    C: Component,
{
    inner: C,
    are_equal: F,
    cache: Option<(C::Props, C::Output)>,
    skipped: u64,
}

impl<C, F> Memo<C, F>
where
    C: Component,
    F: Fn(&C::Props, &C::Props) -> bool,
{
    pub fn new(inner: C, are_equal: F) -> Self {
        Self {
            inner,
            are_equal,
            cache: None,
            skipped: 0,
        }
    }

    /// Renders that reused the cached output.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

impl<C, F> Component for Memo<C, F>
where
    C: Component,
    C::Props: Clone,
    C::Output: Clone,
    F: Fn(&C::Props, &C::Props) -> bool,
{
    type Props = C::Props;
    type Output = C::Output;

    fn render(&mut self, props: &Self::Props) -> Self::Output {
        if let Some((previous, output)) = &mut self.cache {
            if (self.are_equal)(previous, props) {
                // Compare against the immediately previous props next time.
                *previous = props.clone();
                self.skipped += 1;
                tracing::trace!("render skipped by equality predicate");
                return output.clone();
            }
        }

        let output = self.inner.render(props);
        self.cache = Some((props.clone(), output.clone()));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo {
        calls: u32,
    }

    impl Component for Echo {
        type Props = i32;
        type Output = i32;

        fn render(&mut self, props: &i32) -> i32 {
            self.calls += 1;
            *props
        }
    }

    #[test]
    fn first_render_always_runs() {
        let mut memo = Memo::new(Echo { calls: 0 }, |_: &i32, _: &i32| true);
        assert_eq!(memo.render(&7), 7);
        assert_eq!(memo.inner.calls, 1);
        assert_eq!(memo.skipped(), 0);
    }

    #[test]
    fn equal_props_reuse_previous_output() {
        let mut memo = Memo::new(Echo { calls: 0 }, |a: &i32, b: &i32| a / 10 == b / 10);
        assert_eq!(memo.render(&11), 11);
        assert_eq!(memo.render(&15), 11);
        assert_eq!(memo.inner.calls, 1);
        assert_eq!(memo.skipped(), 1);
        assert_eq!(memo.cache.as_ref().map(|(props, _)| *props), Some(15));
        assert_eq!(memo.render(&21), 21);
        assert_eq!(memo.inner.calls, 2);
    }

    #[test]
    fn compares_against_immediately_previous_props() {
        // Equal when within 5 of each other: 0 -> 4 -> 8 drifts without a
        // render because each step is compared to the step before it.
        let mut memo = Memo::new(Echo { calls: 0 }, |a: &i32, b: &i32| (a - b).abs() <= 5);
        memo.render(&0);
        memo.render(&4);
        assert_eq!(memo.render(&8), 0);
        assert_eq!(memo.inner.calls, 1);
    }
}
