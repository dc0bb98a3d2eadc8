use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use super::camera::Viewport;
use super::engine::{GraphEngine, ViewSnapshot};
use super::geometry::Point;
use super::style;
use super::surface::CanvasSurface;
use super::types::{
	EdgeType, GraphData, GraphDisplay, GraphLoad, GraphNode, NavigationIntent, NodeGroup,
};
use crate::config::ViewConfig;

struct MountedView {
	engine: GraphEngine,
	surface: CanvasSurface,
	_resize: Option<ResizeListener>,
}

impl MountedView {
	fn redraw(&mut self) {
		self.engine.draw(&mut self.surface, pixel_ratio());
		let _ = web_sys::HtmlElement::style(self.surface.canvas())
			.set_property("cursor", self.engine.cursor());
	}
}

type ViewCell = Rc<RefCell<Option<MountedView>>>;

/// Window `resize` listener, detached when dropped with its view.
struct ResizeListener {
	window: Window,
	callback: Closure<dyn FnMut()>,
}

impl ResizeListener {
	fn attach(callback: Closure<dyn FnMut()>) -> Option<Self> {
		let window = web_sys::window()?;
		window
			.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
			.ok()?;
		Some(Self { window, callback })
	}
}

impl Drop for ResizeListener {
	fn drop(&mut self) {
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
	}
}

fn pixel_ratio() -> f64 {
	web_sys::window()
		.map(|w| w.device_pixel_ratio())
		.filter(|r| *r > 0.0)
		.unwrap_or(1.0)
}

fn measure(canvas: &HtmlCanvasElement, config: &ViewConfig) -> Viewport {
	let width = canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(config.fallback_width);
	Viewport::new(width, config.height)
}

fn local_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<Point> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some(Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Run `f` on the mounted engine; redraw and publish when it reports a change.
fn apply(cell: &ViewCell, snapshot: RwSignal<ViewSnapshot>, f: impl FnOnce(&mut GraphEngine) -> bool) {
	let mut guard = cell.borrow_mut();
	let Some(view) = guard.as_mut() else {
		return;
	};
	if !f(&mut view.engine) {
		return;
	}
	view.redraw();
	let next = view.engine.snapshot();
	if snapshot.with_untracked(|s| *s != next) {
		snapshot.set(next);
	}
}

/// One view instance: a canvas bound to its own engine, plus toolbar, legend
/// and selection panel.
#[component]
pub fn GraphCanvas(
	graph: Arc<GraphData>,
	#[prop(default = ViewConfig::compact())] config: ViewConfig,
	#[prop(into)] on_navigate: Callback<NavigationIntent>,
	#[prop(optional)] on_expand: Option<Callback<()>>,
	#[prop(optional)] on_close: Option<Callback<()>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let cell: ViewCell = Rc::new(RefCell::new(None));
	let snapshot = RwSignal::new(ViewSnapshot {
		zoom: config.default_zoom,
		..Default::default()
	});
	let legend = graph.group_counts();

	let cell_init = cell.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if cell_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let viewport = measure(&canvas, &config);
		let canvas_resize = canvas.clone();
		let surface = match CanvasSurface::new(canvas) {
			Ok(surface) => surface,
			Err(e) => {
				error!("graph view left inert: {e}");
				return;
			}
		};

		let weak = Rc::downgrade(&cell_init);
		let on_resize = Closure::new(move || {
			let Some(cell) = weak.upgrade() else {
				return;
			};
			let viewport = measure(&canvas_resize, &config);
			apply(&cell, snapshot, |e| e.resize(viewport));
		});

		let mut view = MountedView {
			engine: GraphEngine::new(Arc::clone(&graph), viewport, config.default_zoom),
			surface,
			_resize: ResizeListener::attach(on_resize),
		};
		view.redraw();
		snapshot.set(view.engine.snapshot());
		*cell_init.borrow_mut() = Some(view);
	});

	let cell_md = cell.clone();
	let on_mousedown = move |ev: MouseEvent| {
		ev.prevent_default();
		let Some(p) = local_point(canvas_ref, &ev) else {
			return;
		};
		apply(&cell_md, snapshot, |e| e.pointer_down(p));
	};

	let cell_mm = cell.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(p) = local_point(canvas_ref, &ev) else {
			return;
		};
		apply(&cell_mm, snapshot, |e| e.pointer_move(p));
	};

	let cell_mu = cell.clone();
	let on_mouseup = move |_: MouseEvent| apply(&cell_mu, snapshot, GraphEngine::pointer_up);

	let cell_ml = cell.clone();
	let on_mouseleave = move |_: MouseEvent| apply(&cell_ml, snapshot, GraphEngine::pointer_leave);

	let cell_zi = cell.clone();
	let on_zoom_in = move |_: MouseEvent| apply(&cell_zi, snapshot, GraphEngine::zoom_in);

	let cell_zo = cell.clone();
	let on_zoom_out = move |_: MouseEvent| apply(&cell_zo, snapshot, GraphEngine::zoom_out);

	let cell_rs = cell.clone();
	let on_reset = move |_: MouseEvent| {
		let viewport = canvas_ref.get().map(|canvas| {
			let canvas: HtmlCanvasElement = canvas.into();
			measure(&canvas, &config)
		});
		apply(&cell_rs, snapshot, |e| {
			if let Some(viewport) = viewport {
				e.resize(viewport);
			}
			e.reset()
		});
	};

	let cell_open = cell;
	let on_open = move |_: MouseEvent| {
		let intent = cell_open
			.borrow()
			.as_ref()
			.and_then(|view| view.engine.navigation_intent());
		if let Some(intent) = intent {
			on_navigate.run(intent);
		}
	};

	let selected_field = move |f: fn(&GraphNode) -> String| {
		move || snapshot.with(|s| s.selected.as_ref().map(f).unwrap_or_default())
	};

	view! {
		<div class=config.variant.class_name()>
			<canvas
				node_ref=canvas_ref
				class="relation-graph-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				style=format!("display: block; width: 100%; height: {}px;", config.height)
			/>

			<div class="graph-toolbar">
				<button title="Zoom in" on:click=on_zoom_in>"+"</button>
				<button title="Zoom out" on:click=on_zoom_out>"−"</button>
				<button title="Reset layout" on:click=on_reset>"Reset"</button>
				<span class="graph-zoom">
					{move || format!("{:.0}%", snapshot.with(|s| s.zoom) * 100.0)}
				</span>
				{on_expand
					.map(|cb| {
						view! {
							<button title="Open larger view" on:click=move |_| cb.run(())>
								"Expand"
							</button>
						}
					})}
				{on_close
					.map(|cb| {
						view! {
							<button title="Close" on:click=move |_| cb.run(())>
								"Close"
							</button>
						}
					})}
			</div>

			<GraphLegend groups=legend />

			<p class="graph-hover">
				{move || {
					snapshot
						.with(|s| s.hovered_edge.map(|kind| format!("Relation: {}", kind.label())))
				}}
			</p>

			<div
				class="graph-selection"
				style:display=move || {
					if snapshot.with(|s| s.selected.is_some()) { "block" } else { "none" }
				}
			>
				<h4>{selected_field(|n| n.title.clone())}</h4>
				<p class="graph-selection-group">{selected_field(|n| n.group.label().to_string())}</p>
				<p class="graph-selection-tag">{selected_field(|n| n.tag.clone())}</p>
				<p class="graph-selection-author">
					{selected_field(|n| n.author_name.clone().unwrap_or_default())}
				</p>
				<button
					class="graph-open"
					on:click=on_open
					disabled=move || !snapshot.with(|s| s.can_open)
				>
					"Open"
				</button>
			</div>
		</div>
	}
}

#[component]
fn GraphLegend(groups: Vec<(NodeGroup, usize)>) -> impl IntoView {
	view! {
		<div class="graph-legend">
			<ul class="legend-groups">
				{groups
					.into_iter()
					.map(|(group, count)| {
						view! {
							<li>
								<span
									class="legend-swatch"
									style=format!("background-color: {};", style::group_color(group))
								></span>
								{group.label()}
								<span class="legend-count">{format!(" ({count})")}</span>
							</li>
						}
					})
					.collect_view()}
			</ul>
			<ul class="legend-edges">
				{EdgeType::ALL
					.into_iter()
					.map(|kind| {
						let line = if kind.is_dashed() { "dashed" } else { "solid" };
						view! {
							<li>
								<span
									class="legend-line"
									style=format!("border-top: 2px {line} {};", style::edge_color(kind))
								></span>
								{kind.label()}
							</li>
						}
					})
					.collect_view()}
			</ul>
		</div>
	}
}

#[component]
fn GraphPlaceholder(message: &'static str) -> impl IntoView {
	view! {
		<div class="relation-graph placeholder">
			<p>{message}</p>
		</div>
	}
}

/// Relationship graph of one document: the compact view, and the expanded
/// dialog on demand. Each view seeds and owns its own layout.
#[component]
pub fn RelationGraph(
	#[prop(into)] load: Signal<GraphLoad>,
	#[prop(into)] on_navigate: Callback<NavigationIntent>,
) -> impl IntoView {
	let expanded = RwSignal::new(false);
	let open = Callback::new(move |_: ()| expanded.set(true));
	let close = Callback::new(move |_: ()| expanded.set(false));
	let navigate = Callback::new(move |intent: NavigationIntent| {
		expanded.set(false);
		on_navigate.run(intent);
	});

	move || match load.get().display() {
		GraphDisplay::Loading => {
			view! { <GraphPlaceholder message="Loading relationship graph…" /> }.into_any()
		}
		GraphDisplay::Unavailable => {
			view! { <GraphPlaceholder message="Relationship data unavailable" /> }.into_any()
		}
		GraphDisplay::NoConnections => {
			view! { <GraphPlaceholder message="No connections yet" /> }.into_any()
		}
		GraphDisplay::Interactive(graph) => {
			let dialog_graph = Arc::clone(&graph);
			view! {
				<GraphCanvas
					graph=graph
					config=ViewConfig::compact()
					on_navigate=navigate
					on_expand=open
				/>
				<Show when=move || expanded.get()>
					<div class="graph-dialog-backdrop">
						<div class="graph-dialog" role="dialog">
							<GraphCanvas
								graph=Arc::clone(&dialog_graph)
								config=ViewConfig::expanded()
								on_navigate=navigate
								on_close=close
							/>
						</div>
					</div>
				</Show>
			}
				.into_any()
		}
	}
}
