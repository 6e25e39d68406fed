use super::{Effects, Event};
use crate::Config;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Fx {
    None,
    Flash,
    Breathe { inhale: bool },
}

/// The ambient LED strip: a single HSB colour animated frame by frame.
#[derive(Clone, Debug)]
pub struct Light {
    hue: f32,
    saturation: f32,
    brightness: f32,
    fx: Fx,
    clock: u32,
    // in frames
    duration: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            hue: 0.,
            saturation: 1.,
            brightness: 0.,
            fx: Fx::None,
            clock: 0,
            duration: 1.,
        }
    }
}

impl Light {
    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn is_off(&self) -> bool {
        self.fx == Fx::None && self.brightness == 0.
    }

    pub fn off(&mut self) {
        self.fx = Fx::None;
        self.brightness = 0.;
    }

    /// Full brightness fading out over `seconds`, then off.
    pub fn flash(&mut self, hue: f32, seconds: f32) {
        self.fx = Fx::Flash;
        self.hue = hue;
        self.clock = 0;
        self.duration = (seconds * Config::EFFECT_FRAME_RATE).max(1.);
    }

    /// Fades in and out forever, one full cycle per `period` seconds.
    pub fn breathe(&mut self, hue: f32, period: f32) {
        self.fx = Fx::Breathe { inhale: true };
        self.hue = hue;
        self.clock = 0;
        self.duration = (period * 0.5 * Config::EFFECT_FRAME_RATE).max(1.);
    }

    /// Advances the running animation by one frame.
    pub fn advance(&mut self) {
        match self.fx {
            Fx::None => {}
            Fx::Flash => {
                let t = self.clock as f32;
                self.clock += 1;
                self.brightness = ease_out_cubic(t, 1., -1., self.duration);
                if self.clock as f32 >= self.duration {
                    self.off();
                }
            }
            Fx::Breathe { inhale } => {
                let t = self.clock as f32;
                self.clock += 1;
                let (from, change) = if inhale { (0., 1.) } else { (1., -1.) };
                self.brightness = ease_in_out_quad(t, from, change, self.duration);
                if self.clock as f32 >= self.duration {
                    self.clock = 0;
                    self.fx = Fx::Breathe { inhale: !inhale };
                }
            }
        }
    }

    /// Current colour as 8-bit RGB.
    pub fn rgb(&self) -> [u8; 3] {
        hsv_to_rgb(self.hue, self.saturation, self.brightness)
    }
}

impl Effects for Light {
    fn on_event(&mut self, event: Event) {
        match event {
            Event::Start => self.breathe(100., 0.5),
            Event::Stop => self.flash(10., 0.25),
            Event::Step => self.flash(10., 0.1),
            Event::StartEdit => self.breathe(240., 2.),
            Event::StopEdit => self.flash(180., 0.25),
            Event::MenuOpened => self.off(),
        }
    }

    fn tick(&mut self) {
        self.advance();
    }
}

fn ease_in_out_quad(t: f32, from: f32, change: f32, duration: f32) -> f32 {
    let t = t / (duration / 2.);
    if t < 1. {
        return change / 2. * t * t + from;
    }
    let t = t - 1.;
    -change / 2. * (t * (t - 2.) - 1.) + from
}

fn ease_out_cubic(t: f32, from: f32, change: f32, duration: f32) -> f32 {
    let t = t / duration - 1.;
    change * (t * t * t + 1.) + from
}

/// `hue` in degrees, `saturation` and `value` in `0..=1`.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> [u8; 3] {
    let v = value.clamp(0., 1.);
    let (r, g, b) = if saturation <= 0. {
        (v, v, v)
    } else {
        let s = saturation.min(1.);
        let h = hue.rem_euclid(360.) / 60.;
        let i = h.trunc() as u32;
        let f = h - i as f32;
        let p = v * (1. - s);
        let q = v * (1. - f * s);
        let t = v * (1. - (1. - f) * s);
        match i {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        }
    };
    [(r * 255.) as u8, (g * 255.) as u8, (b * 255.) as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_fades_out() {
        let mut light = Light::default();
        light.flash(10., 0.25);
        let mut levels = vec![];
        while !light.is_off() {
            light.advance();
            levels.push(light.brightness());
            assert!(levels.len() < 100);
        }
        // 0.25s at 25 frames per second
        assert!(levels.len() >= 6 && levels.len() <= 7, "{:?}", levels);
        assert!((levels[0] - 1.).abs() < 1e-6);
        assert!(levels.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn test_breathe_oscillates() {
        let mut light = Light::default();
        light.breathe(100., 2.);
        let mut max = 0f32;
        let mut min = 1f32;
        for _ in 0..100 {
            light.advance();
            max = max.max(light.brightness());
            min = min.min(light.brightness());
        }
        assert!(max > 0.9 && min < 0.1);
        assert!(!light.is_off());
    }

    #[test]
    fn test_events_drive_the_light() {
        let mut light = Light::default();
        light.on_event(Event::Start);
        light.tick();
        light.tick();
        assert!(light.brightness() > 0.);
        assert_eq!(light.hue(), 100.);
        light.on_event(Event::MenuOpened);
        assert!(light.is_off());
        assert_eq!(light.rgb(), [0, 0, 0]);
    }

    #[test]
    fn test_hsv_to_rgb() {
        assert_eq!(hsv_to_rgb(0., 1., 1.), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(120., 1., 1.), [0, 255, 0]);
        assert_eq!(hsv_to_rgb(240., 1., 1.), [0, 0, 255]);
        assert_eq!(hsv_to_rgb(360., 1., 1.), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(42., 0., 0.5), [127, 127, 127]);
    }
}
