//! WASM bridge exposing the transport solvers to a JavaScript plotting front end.

use transport_core::benchmark::{run_benchmark, BenchmarkMode, Clock};
use transport_core::grid::Grid;
use transport_core::initial::GaussianPulse;
use transport_core::settings::TransportSettings;
use transport_core::Scheme;
use wasm_bindgen::prelude::*;

/// Wall clock read through `Date.now()`; `std::time::Instant` is unavailable in the browser.
struct JsClock;

impl Clock for JsClock {
    fn now_seconds(&mut self) -> f64 {
        js_sys::Date::now() / 1000.0
    }
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct WasmTransport {
    settings: TransportSettings,
    grid: Grid<f64>,
    pulse: GaussianPulse<f64>,
}

#[wasm_bindgen]
impl WasmTransport {
    #[wasm_bindgen(constructor)]
    pub fn new(
        length: f64,
        points: usize,
        steps: usize,
        dt: f64,
        wave_speed: f64,
        variance: f64,
    ) -> Result<WasmTransport, JsValue> {
        console_error_panic_hook::set_once();

        let settings = TransportSettings {
            length,
            points,
            steps,
            dt,
            wave_speed,
            variance,
        };
        let grid = settings.grid().map_err(to_js_error)?;
        let pulse = settings.initial_condition(&grid).map_err(to_js_error)?;

        Ok(WasmTransport {
            settings,
            grid,
            pulse,
        })
    }

    /// Builds the bridge with the reference scenario.
    pub fn reference() -> Result<WasmTransport, JsValue> {
        let s = TransportSettings::default();
        Self::new(s.length, s.points, s.steps, s.dt, s.wave_speed, s.variance)
    }

    pub fn grid(&self) -> Vec<f64> {
        self.grid.points().to_vec()
    }

    pub fn theta(&self) -> Vec<f64> {
        self.pulse.theta.clone()
    }

    pub fn initial_field(&self) -> Vec<f64> {
        self.pulse.field.clone()
    }

    pub fn cfl(&self) -> f64 {
        self.settings.cfl().cfl()
    }

    pub fn is_stable(&self) -> bool {
        self.settings.cfl().is_stable()
    }

    pub fn cfl_message(&self) -> String {
        self.settings.cfl().to_string()
    }

    /// Integrates the initial pulse with the named scheme
    /// (`upwind`, `upwind_vectorized`, `central`, `central_vectorized`).
    pub fn integrate(&self, scheme: &str) -> Result<Vec<f64>, JsValue> {
        let scheme: Scheme = scheme.parse().map_err(to_js_error)?;
        self.settings
            .integrate(&self.pulse.field, scheme)
            .map_err(to_js_error)
    }

    /// Runs all four schemes and returns the serialized report (grid, fields, timings).
    pub fn benchmark(&self, chained: bool) -> Result<JsValue, JsValue> {
        let mode = if chained {
            BenchmarkMode::Chained
        } else {
            BenchmarkMode::Independent
        };
        let report = run_benchmark(&self.settings, mode, &mut JsClock)
            .map_err(|err| JsValue::from_str(&format!("{err:#}")))?;
        serde_wasm_bindgen::to_value(&report)
            .map_err(|err| JsValue::from_str(&format!("Failed to serialize report: {err}")))
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn benchmark_serializes_report() {
        let transport = WasmTransport::new(2.0, 41, 10, 0.01, 1.0, 0.01).expect("transport");
        let value = transport.benchmark(false).expect("benchmark");
        assert!(value.is_object());
    }
}
