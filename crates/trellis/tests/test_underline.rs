//! Integration tests for the animated underline's frame-by-frame motion.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use trellis::{
        Component, Context, Ref, StringListRef, Timing, UnderlineOption,
        animation::{Params, easing},
        event::key::KeyCode,
        widgets::UnderlineToggle,
    };

    const MS: Duration = Duration::from_millis(1);

    /// Linear easing with the leading edge twice as fast as the trailing one.
    fn asymmetric() -> UnderlineOption {
        let mut opt = UnderlineOption::default().with_animation_easing(easing::linear);
        opt.leader = Timing {
            duration: 100 * MS,
            easing: easing::linear,
            delay: Duration::ZERO,
        };
        opt.follower = Timing {
            duration: 200 * MS,
            easing: easing::linear,
            delay: Duration::ZERO,
        };
        opt
    }

    /// One frame of the host loop: advance animations, then render.
    fn frame(t: &mut UnderlineToggle, ctx: &Context, elapsed: Duration) {
        t.on_animation(&Params::new(elapsed));
        t.render(ctx).unwrap();
    }

    #[test]
    fn bar_stretches_then_catches_up() {
        let mut ctx = Context::new();
        let selected = Ref::new(0usize);
        let mut t = UnderlineToggle::new(
            StringListRef::from_strs(&["ab", "cd"]),
            selected,
            asymmetric(),
        );
        // Settle under entry 0, columns [0, 2).
        frame(&mut t, &ctx, Duration::ZERO);
        frame(&mut t, &ctx, 500 * MS);
        assert_eq!(t.edges(), (0.0, 2.0));

        ctx.dispatch(&mut t, &KeyCode::Right.into()).unwrap();
        frame(&mut t, &ctx, Duration::ZERO);

        // Entry 1 spans [3, 5). Halfway through the leader's run the right
        // edge has covered twice the fraction the left has, so the bar is
        // wider than either endpoint span.
        frame(&mut t, &ctx, 50 * MS);
        let (l, r) = t.edges();
        assert_eq!(r, 3.5);
        assert_eq!(l, 0.75);
        assert!(r - l > 2.0);

        // The leader lands first; the follower is still in flight.
        frame(&mut t, &ctx, 50 * MS);
        let (l, r) = t.edges();
        assert_eq!(r, 5.0);
        assert!(l < 3.0);

        // Fully settled.
        frame(&mut t, &ctx, 200 * MS);
        assert_eq!(t.edges(), (3.0, 5.0));
    }

    #[test]
    fn reversal_mid_flight_swaps_roles_without_jumping() {
        let mut ctx = Context::new();
        let selected = Ref::new(0usize);
        let mut t = UnderlineToggle::new(
            StringListRef::from_strs(&["ab", "cd", "ef"]),
            selected,
            asymmetric(),
        );
        frame(&mut t, &ctx, Duration::ZERO);
        frame(&mut t, &ctx, 500 * MS);

        ctx.dispatch(&mut t, &KeyCode::Right.into()).unwrap();
        frame(&mut t, &ctx, Duration::ZERO);
        frame(&mut t, &ctx, 50 * MS);
        let before = t.edges();

        // Reverse toward entry 0 while both edges are still moving.
        ctx.dispatch(&mut t, &KeyCode::Left.into()).unwrap();
        frame(&mut t, &ctx, Duration::ZERO);
        assert_eq!(t.edges(), before);

        // Now the left edge leads: after the leader's full run it has landed
        // while the right edge is still trailing.
        frame(&mut t, &ctx, 100 * MS);
        let (l, r) = t.edges();
        assert_eq!(l, 0.0);
        assert!(r > 2.0);

        frame(&mut t, &ctx, 200 * MS);
        assert_eq!(t.edges(), (0.0, 2.0));
    }

    #[test]
    fn rendered_bar_span_follows_the_edges() {
        let ctx = Context::new();
        let selected = Ref::new(1usize);
        let mut t = UnderlineToggle::new(
            StringListRef::from_strs(&["ab", "cd"]),
            selected,
            UnderlineOption::default().with_animation_duration(Duration::ZERO),
        );
        frame(&mut t, &ctx, Duration::ZERO);
        t.on_animation(&Params::new(MS));
        let el = t.render(&ctx).unwrap();
        let bar = el.find_underline().expect("bar fragment");
        assert_eq!(bar.span(), (3, 5));
    }
}
