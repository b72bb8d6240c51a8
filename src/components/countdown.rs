use gloo_timers::callback::Interval;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

/// Breakdown of the time remaining until `target_ms`, clamped at zero.
/// Each tick recomputes from the wall clock, so the display never drifts.
pub fn time_left(target_ms: f64, now_ms: f64) -> TimeLeft {
    let diff = (target_ms - now_ms).max(0.0);
    let total_seconds = (diff / 1000.0).floor() as u64;
    TimeLeft {
        days: total_seconds / 86_400,
        hours: (total_seconds % 86_400) / 3_600,
        minutes: (total_seconds % 3_600) / 60,
        seconds: total_seconds % 60,
    }
}

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
    pub target_iso: String,
}

#[function_component(Countdown)]
pub fn countdown(props: &CountdownProps) -> Html {
    let target_ms = js_sys::Date::new(&props.target_iso.as_str().into()).get_time();
    let left = use_state(|| time_left(target_ms, js_sys::Date::now()));

    {
        let left = left.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(1000, move || {
                    left.set(time_left(target_ms, js_sys::Date::now()));
                });
                // Dropping the interval cancels it when the component unmounts
                move || drop(interval)
            },
            props.target_iso.clone(),
        );
    }

    html! {
        <div class="linen-card countdown">
            <div class="linen-title countdown-heading">{"Faltan"}</div>
            <div class="countdown-grid">
                <TimeBox value={left.days} label="Días" />
                <TimeBox value={left.hours} label="hr" />
                <TimeBox value={left.minutes} label="min" />
                <TimeBox value={left.seconds} label="seg" />
            </div>
            <div class="countdown-heart">
                <i class="fa-solid fa-heart"></i>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TimeBoxProps {
    value: u64,
    label: &'static str,
}

#[function_component(TimeBox)]
fn time_box(props: &TimeBoxProps) -> Html {
    html! {
        <div class="time-box">
            <div class="time-box-value">{format!("{:02}", props.value)}</div>
            <div class="time-box-label">{props.label}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_zero_at_and_after_target() {
        let target = 1_000_000.0;
        for now in [target, target + 1.0, target + 86_400_000.0] {
            let left = time_left(target, now);
            assert_eq!(
                left,
                TimeLeft {
                    days: 0,
                    hours: 0,
                    minutes: 0,
                    seconds: 0
                }
            );
        }
    }

    #[test]
    fn exactly_one_day_before_the_event() {
        // target 2026-02-28T12:00:00-03:00, observed 2026-02-27T12:00:00-03:00
        let target = 1_772_290_800_000.0;
        let now = target - 86_400_000.0;
        let left = time_left(target, now);
        assert_eq!(left.days, 1);
        assert_eq!(left.hours, 0);
        assert_eq!(left.minutes, 0);
        assert_eq!(left.seconds, 0);
    }

    #[test]
    fn breakdown_reassembles_to_total_seconds() {
        let target = 9_000_000_000.0;
        for offset_ms in [1.0, 999.0, 1000.0, 61_000.0, 3_599_999.0, 90_061_000.0] {
            let now = target - offset_ms;
            let left = time_left(target, now);
            let total = left.days * 86_400 + left.hours * 3_600 + left.minutes * 60 + left.seconds;
            assert_eq!(total, (offset_ms / 1000.0).floor() as u64);
            assert!(left.hours < 24);
            assert!(left.minutes < 60);
            assert!(left.seconds < 60);
        }
    }
}
