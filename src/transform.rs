//! Splitting the combined node trace and regenerating dropdown controls.
//!
//! The generated plot holds every node in one scatter trace, so the
//! visibility dropdown can only toggle edges. Splitting gives each node its
//! own single-point trace, which lets each dropdown option isolate one node
//! while keeping the shared color scale intact.

use serde_json::{Value, json};

use crate::config::{Captions, Options};
use crate::error::RewriteError;

/// What the split produced; feeds the dropdown rebuild and progress output.
#[derive(Debug)]
pub struct SplitSummary {
    /// Node names in combined-trace order.
    pub names: Vec<Value>,
    /// Traces preceding the node segment (edges and legend entries).
    pub other_count: usize,
    pub node_count: usize,
}

/// Parallel per-node arrays read out of the combined trace.
struct NodeData {
    names: Vec<Value>,
    x: Vec<Value>,
    y: Vec<Value>,
    hovertext: Vec<Value>,
    colors: Vec<Value>,
    colorscale: Value,
    colorbar: Option<Value>,
}

/// A plot we already rewrote starts its dropdown with the "All" option and
/// ends its trace list with a single-point node trace. Splitting such a
/// file again would shred single-point traces, so the pipeline refuses up
/// front. Requiring both signals keeps a fresh plot whose dropdown happens
/// to be labeled "All" splittable.
pub fn is_already_split(layout: &Value, traces: &[Value]) -> bool {
    let all_label = layout
        .get("updatemenus")
        .and_then(|m| m.get(0))
        .and_then(|m| m.get("buttons"))
        .and_then(|b| b.get(0))
        .and_then(|b| b.get("label"))
        .and_then(Value::as_str)
        == Some("All");
    if !all_label {
        return false;
    }

    // A multi-point combined trace at the end means the label is a
    // coincidence and there is still something to split
    traces
        .last()
        .and_then(|t| t.get("x"))
        .and_then(Value::as_array)
        .is_none_or(|x| x.len() <= 1)
}

/// Remove the last trace (the combined node trace), split it into one
/// single-point trace per node and append those in node order.
///
/// Every generated trace shares the combined trace's colorscale with
/// `cmin`/`cmax` pinned to the global bounds of the original color array,
/// so marker intensity stays comparable after the split. Only the first
/// generated trace carries the colorbar.
pub fn split_node_trace(
    traces: &mut Vec<Value>,
    options: &Options,
) -> Result<SplitSummary, RewriteError> {
    let combined = traces
        .pop()
        .ok_or_else(|| RewriteError::StructuralMismatch("plot has no traces".into()))?;
    let other_count = traces.len();

    let nodes = read_node_data(&combined)?;
    let (cmin, cmax) = color_bounds(&nodes.colors)?;
    let node_count = nodes.names.len();

    for i in 0..node_count {
        let mut marker = json!({
            "color": [nodes.colors[i].clone()],
            "colorscale": nodes.colorscale.clone(),
            "cmin": cmin.clone(),
            "cmax": cmax.clone(),
            "line": {
                "color": options.marker.line_color.as_str(),
                "width": options.marker.line_width,
            },
            "opacity": options.marker.opacity,
            "size": options.marker.size,
        });
        // One colorbar for the whole plot, attached to the first node trace
        if i == 0
            && let Some(colorbar) = &nodes.colorbar
        {
            marker["colorbar"] = colorbar.clone();
        }

        traces.push(json!({
            "hoverinfo": "text",
            "hovertext": [nodes.hovertext[i].clone()],
            "marker": marker,
            "mode": "markers+text",
            "name": nodes.names[i].clone(),
            "showlegend": false,
            "text": [nodes.names[i].clone()],
            "textfont": {
                "color": options.label.font_color.as_str(),
                "size": options.label.font_size,
            },
            "textposition": options.label.position.as_str(),
            "x": [nodes.x[i].clone()],
            "y": [nodes.y[i].clone()],
            "type": "scatter",
        }));
    }

    Ok(SplitSummary {
        names: nodes.names,
        other_count,
        node_count,
    })
}

/// Replace the first dropdown menu's buttons: an "All" option plus one
/// option per node whose visibility vector keeps the whole edge/legend
/// segment visible and exactly one node trace visible.
pub fn rebuild_dropdown(layout: &mut Value, summary: &SplitSummary) -> Result<(), RewriteError> {
    let total = summary.other_count + summary.node_count;

    let mut buttons = Vec::with_capacity(summary.node_count + 1);
    buttons.push(json!({
        "args": [{"visible": vec![true; total]}],
        "label": "All",
        "method": "update",
    }));
    for (i, name) in summary.names.iter().enumerate() {
        let mut visible = vec![true; summary.other_count];
        visible.extend((0..summary.node_count).map(|j| j == i));
        buttons.push(json!({
            "args": [{"visible": visible}],
            "label": name.clone(),
            "method": "update",
        }));
    }

    let menu = layout
        .get_mut("updatemenus")
        .and_then(Value::as_array_mut)
        .and_then(|menus| menus.first_mut())
        .ok_or_else(|| RewriteError::StructuralMismatch("layout has no dropdown menu".into()))?;
    menu["buttons"] = Value::Array(buttons);

    Ok(())
}

/// Relabel the dropdown caption annotation, if present.
pub fn relabel_caption(layout: &mut Value, captions: &Captions) {
    let Some(annotations) = layout.get_mut("annotations").and_then(Value::as_array_mut) else {
        return;
    };
    for annotation in annotations {
        if annotation.get("text").and_then(Value::as_str) == Some(captions.from.as_str()) {
            annotation["text"] = Value::String(captions.to.clone());
        }
    }
}

fn read_node_data(combined: &Value) -> Result<NodeData, RewriteError> {
    let array = |value: &Value, key: &str| -> Result<Vec<Value>, RewriteError> {
        value
            .get(key)
            .and_then(Value::as_array)
            .cloned()
            .ok_or_else(|| {
                RewriteError::StructuralMismatch(format!("node trace is missing array '{key}'"))
            })
    };

    let names = array(combined, "text")?;
    let x = array(combined, "x")?;
    let y = array(combined, "y")?;
    let hovertext = array(combined, "hovertext")?;

    let marker = combined.get("marker").ok_or_else(|| {
        RewriteError::StructuralMismatch("node trace is missing 'marker'".into())
    })?;
    let colors = array(marker, "color")?;
    let colorscale = marker.get("colorscale").cloned().unwrap_or(Value::Null);
    let colorbar = marker.get("colorbar").cloned();

    let n = names.len();
    if n == 0 {
        return Err(RewriteError::StructuralMismatch(
            "node trace has no nodes".into(),
        ));
    }
    if [x.len(), y.len(), hovertext.len(), colors.len()] != [n, n, n, n] {
        return Err(RewriteError::StructuralMismatch(format!(
            "parallel node arrays differ in length: text={}, x={}, y={}, hovertext={}, color={}",
            n,
            x.len(),
            y.len(),
            hovertext.len(),
            colors.len()
        )));
    }

    Ok(NodeData {
        names,
        x,
        y,
        hovertext,
        colors,
        colorscale,
        colorbar,
    })
}

/// Global min and max over the original color array, returned as clones of
/// the original JSON numbers so integer colors stay integers.
fn color_bounds(colors: &[Value]) -> Result<(Value, Value), RewriteError> {
    let mut min: Option<(f64, &Value)> = None;
    let mut max: Option<(f64, &Value)> = None;

    for color in colors {
        let v = color.as_f64().ok_or_else(|| {
            RewriteError::StructuralMismatch(format!("non-numeric marker color: {color}"))
        })?;
        if min.is_none_or(|(m, _)| v < m) {
            min = Some((v, color));
        }
        if max.is_none_or(|(m, _)| v > m) {
            max = Some((v, color));
        }
    }

    match (min, max) {
        (Some((_, lo)), Some((_, hi))) => Ok((lo.clone(), hi.clone())),
        _ => Err(RewriteError::StructuralMismatch(
            "node trace has no marker colors".into(),
        )),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
