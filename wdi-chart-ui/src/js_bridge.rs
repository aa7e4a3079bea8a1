//! Typed wrappers around Plotly.js calls via `js_sys::eval()`.
//!
//! Plotly.js is loaded from a `<script>` tag in the host page, not bundled
//! into the WASM binary. Because the library and the target container may
//! both appear after a render call fires, every render polls until
//! `window.Plotly` and the container element exist before drawing.

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WDI JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Render a figure into the container with `Plotly.react`, registering
/// animation frames when the figure carries them.
///
/// `figure_json` is the serialized `{"data": ..., "layout": ...}` payload
/// from a `ChartSpec`. Re-invoking on the same container replaces the plot
/// in place, which is what makes the choropleth metric swap cheap.
pub fn render_plot(container_id: &str, figure_json: &str) {
    let escaped = figure_json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (typeof Plotly !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        var fig = JSON.parse('{escaped}');
                        Plotly.react('{container_id}', fig.data, fig.layout,
                                     {{responsive: true}}).then(function() {{
                            if (fig.frames) {{
                                Plotly.addFrames('{container_id}', fig.frames);
                            }}
                        }});
                    }} catch(e) {{ console.error('[WDI] render_plot error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Tear down a plot and empty its container.
///
/// Safe to call when the container has already been unmounted (modal
/// closed): Plotly's purge is skipped and the DOM lookup just misses.
pub fn destroy_plot(container_id: &str) {
    call_js(&format!(
        "if (typeof Plotly !== 'undefined' && document.getElementById('{container_id}')) {{ Plotly.purge('{container_id}'); }}",
    ));
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id))
    {
        el.set_inner_html("");
    }
}
