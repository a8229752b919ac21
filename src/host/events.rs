use crate::core::config::ButtonScheme;

/// Raw input as the host sees it, before the engine interprets it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    Key { code: u32, down: bool },
    /// `button` is in the numbering of the configured `ButtonScheme`
    MouseButton { button: u32, down: bool },
    MouseMove { x: i32, y: i32 },
    Wheel { dx: i32, dy: i32 },
}

impl HostEvent {
    /// Button event from the DOM `button` and `which` fields; the scheme
    /// decides which of the two is forwarded.
    pub fn mouse_button(button: i16, which: u32, down: bool, scheme: ButtonScheme) -> Self {
        let button = match scheme {
            // negative ids are not real buttons; map them out of range
            ButtonScheme::Button => u32::try_from(button).unwrap_or(u32::MAX),
            ButtonScheme::Which => which,
        };
        HostEvent::MouseButton { button, down }
    }

    /// Pixel or line deltas become one notch per event.
    pub fn wheel(delta_x: f64, delta_y: f64) -> Self {
        HostEvent::Wheel {
            dx: notch(delta_x),
            dy: notch(delta_y),
        }
    }
}

fn notch(delta: f64) -> i32 {
    if delta > 0.0 {
        1
    } else if delta < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_deltas_collapse_to_notches() {
        assert_eq!(HostEvent::wheel(0.0, 120.0), HostEvent::Wheel { dx: 0, dy: 1 });
        assert_eq!(HostEvent::wheel(-3.5, -0.01), HostEvent::Wheel { dx: -1, dy: -1 });
        assert_eq!(HostEvent::wheel(f64::NAN, 0.0), HostEvent::Wheel { dx: 0, dy: 0 });
    }

    #[test]
    fn scheme_picks_the_button_field() {
        assert_eq!(
            HostEvent::mouse_button(0, 1, true, ButtonScheme::Button),
            HostEvent::MouseButton { button: 0, down: true }
        );
        assert_eq!(
            HostEvent::mouse_button(2, 3, false, ButtonScheme::Which),
            HostEvent::MouseButton { button: 3, down: false }
        );
    }

    #[test]
    fn negative_button_is_out_of_range() {
        assert_eq!(
            HostEvent::mouse_button(-1, 0, true, ButtonScheme::Button),
            HostEvent::MouseButton { button: u32::MAX, down: true }
        );
    }
}
