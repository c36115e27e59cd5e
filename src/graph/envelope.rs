use crate::{
    dsp::envelope::{AdsrParams, DecayCurve},
    error::GraphError,
    graph::{
        module::{Inputs, Module, Render},
        node::{Input, RenderCtx, Slot},
        trigger::NO_EVENT,
    },
};

/// Amplitude envelope in [0, 1] driven by press and release triggers.
///
/// Slots: `trigger_press` and `trigger_release`, both elapsed-time signals
/// such as a [`Trigger`](crate::graph::Trigger). The release slot defaults
/// to a constant [`NO_EVENT`], which sustains forever.
pub type Adsr = Module<AdsrParams>;

impl Render for AdsrParams {
    const NAME: &'static str = "adsr";

    fn render_block(
        &mut self,
        inputs: &Inputs<'_>,
        out: &mut [f32],
        _ctx: &RenderCtx,
    ) -> Result<(), GraphError> {
        let press = inputs.signal(0)?;
        let release = inputs.signal(1)?;
        for ((sample, &p), &r) in out.iter_mut().zip(press).zip(release) {
            *sample = self.level(p, r);
        }
        Ok(())
    }
}

impl Module<AdsrParams> {
    pub fn new(press: impl Into<Input>, params: AdsrParams) -> Self {
        Self::with_release(press, NO_EVENT, params)
    }

    pub fn with_release(
        press: impl Into<Input>,
        release: impl Into<Input>,
        params: AdsrParams,
    ) -> Self {
        Module::from_parts(
            params,
            vec![
                Slot::signal("trigger_press", press),
                Slot::signal("trigger_release", release),
            ],
        )
    }

    pub fn params(&self) -> &AdsrParams {
        self.state()
    }
}

/// Curve and length of a [`Decay`] envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayShape {
    pub curve: DecayCurve,
    pub duration: f32,
}

/// One-shot fall from 1 to 0 after every press. Slot `trigger_press`.
pub type Decay = Module<DecayShape>;

impl Render for DecayShape {
    const NAME: &'static str = "decay";

    fn render_block(
        &mut self,
        inputs: &Inputs<'_>,
        out: &mut [f32],
        _ctx: &RenderCtx,
    ) -> Result<(), GraphError> {
        let press = inputs.signal(0)?;
        for (sample, &elapsed) in out.iter_mut().zip(press) {
            *sample = self.curve.level(elapsed, self.duration);
        }
        Ok(())
    }
}

impl Module<DecayShape> {
    pub fn new(press: impl Into<Input>, curve: DecayCurve, duration: f32) -> Self {
        Module::from_parts(
            DecayShape {
                curve,
                duration: duration.max(0.0),
            },
            vec![Slot::signal("trigger_press", press)],
        )
    }

    pub fn linear(press: impl Into<Input>, duration: f32) -> Self {
        Self::new(press, DecayCurve::Linear, duration)
    }

    pub fn quadratic(press: impl Into<Input>, duration: f32) -> Self {
        Self::new(press, DecayCurve::Quadratic, duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::GraphConfig,
        graph::{Graph, Trigger},
    };

    #[test]
    fn press_and_release_triggers_shape_a_note() {
        let mut graph = Graph::new(GraphConfig::new(10.0, 20)).unwrap();
        let press = graph.add(Trigger::from_times(vec![0.0]).unwrap()).unwrap();
        let release = graph.add(Trigger::from_times(vec![1.0]).unwrap()).unwrap();
        let env = graph
            .add(Adsr::with_release(
                press,
                release,
                AdsrParams::new(0.2, 0.2, 0.5, 0.5),
            ))
            .unwrap();

        let out = graph.get_output(env, 0).unwrap();
        assert_eq!(out[0], 0.0);
        assert!((out[2] - 1.0).abs() < 1e-5);
        assert!((out[9] - 0.5).abs() < 1e-5);
        // 0.2s into a 0.5s release
        assert!((out[12] - 0.3).abs() < 1e-5);
        assert_eq!(out[15], 0.0);
        assert_eq!(out[19], 0.0);
    }

    #[test]
    fn release_slot_can_be_bound_later() {
        let mut graph = Graph::new(GraphConfig::new(10.0, 10)).unwrap();
        let press = graph.add(Trigger::from_times(vec![0.0]).unwrap()).unwrap();
        let env = graph
            .add(Adsr::new(press, AdsrParams::new(0.0, 0.0, 1.0, 0.0)))
            .unwrap();
        let release = graph.add(Trigger::from_times(vec![0.5]).unwrap()).unwrap();
        graph.bind(env, "trigger_release", release).unwrap();

        let out = graph.get_output(env, 0).unwrap();
        assert_eq!(&out[..5], &[1.0; 5]);
        assert_eq!(&out[5..], &[0.0; 5]);
    }

    #[test]
    fn decay_restarts_on_every_press() {
        let mut graph = Graph::new(GraphConfig::new(10.0, 10)).unwrap();
        let press = graph
            .add(Trigger::from_times(vec![0.0, 0.5]).unwrap())
            .unwrap();
        let decay = graph.add(Decay::linear(press, 0.4)).unwrap();

        let out = graph.get_output(decay, 0).unwrap();
        assert_eq!(out[0], 1.0);
        assert!((out[2] - 0.5).abs() < 1e-5);
        assert_eq!(out[4], 0.0);
        assert_eq!(out[5], 1.0);
    }
}
