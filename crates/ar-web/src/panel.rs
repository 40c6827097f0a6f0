use crate::three::{
    js_options, CanvasTexture, Group, Mesh, MeshBasicMaterial, PlaneGeometry, Texture,
};
use ar_core::{
    PanelContent, PANE_CONTENT_SIZE, PANE_CONTENT_Z, PANE_OFFSET_X, PANE_OPACITY, PANE_SIZE,
    PANEL_POSITION, PANEL_SCALE, PANEL_TEXT_CANVAS,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const DOUBLE_SIDE: u32 = 2; // THREE.DoubleSide

/// The built panel: its root group plus the material whose map is the slide.
pub struct PanelObjects {
    pub group: Group,
    pub slide_material: MeshBasicMaterial,
}

fn backing_material() -> MeshBasicMaterial {
    MeshBasicMaterial::new(&js_options(&[
        ("color", JsValue::from(0xffffff)),
        ("opacity", JsValue::from(PANE_OPACITY)),
        ("transparent", JsValue::TRUE),
        ("side", JsValue::from(DOUBLE_SIDE)),
    ]))
}

fn content_material(map: &Texture) -> MeshBasicMaterial {
    MeshBasicMaterial::new(&js_options(&[
        ("map", JsValue::from(map.clone())),
        ("transparent", JsValue::TRUE),
        ("side", JsValue::from(DOUBLE_SIDE)),
    ]))
}

fn plane(size: [f32; 2], material: &MeshBasicMaterial, x: f32, z: f32) -> Mesh {
    let mesh = Mesh::new(&PlaneGeometry::new(size[0], size[1]), material);
    mesh.position().set(x, 0.0, z);
    mesh
}

/// Paint the title bar and body lines onto a fresh canvas.
fn text_canvas(document: &web::Document, content: &PanelContent) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let [w, h] = PANEL_TEXT_CANVAS;
    canvas.set_width(w);
    canvas.set_height(h);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let (w, h) = (w as f64, h as f64);
    ctx.set_fill_style_str("#3498db");
    ctx.fill_rect(0.0, 0.0, w, 50.0);
    ctx.set_fill_style_str("#222222");
    ctx.fill_rect(0.0, 50.0, w, h);
    ctx.set_text_align("center");
    ctx.set_fill_style_str("white");
    ctx.set_font("30px Arial");
    _ = ctx.fill_text(&content.title, w / 2.0, 35.0);
    ctx.set_font("18px Arial");
    let mut y = 85.0;
    for (i, line) in content.lines.iter().enumerate() {
        _ = ctx.fill_text(line, w / 2.0, y);
        // lines come in pairs; leave a gap between pairs
        y += if i % 2 == 0 { 30.0 } else { 40.0 };
    }
    Ok(canvas)
}

pub fn build_panel(
    document: &web::Document,
    content: &PanelContent,
    slide: &Texture,
) -> anyhow::Result<PanelObjects> {
    let group = Group::new();

    let left = plane(PANE_SIZE, &backing_material(), -PANE_OFFSET_X, 0.0);
    let right = plane(PANE_SIZE, &backing_material(), PANE_OFFSET_X, 0.0);

    let slide_material = content_material(slide);
    let slide_mesh = plane(PANE_CONTENT_SIZE, &slide_material, PANE_OFFSET_X, PANE_CONTENT_Z);

    let text_texture = CanvasTexture::new(&text_canvas(document, content)?);
    text_texture.set_needs_update(true);
    let text_mesh = plane(
        PANE_CONTENT_SIZE,
        &content_material(&text_texture),
        -PANE_OFFSET_X,
        PANE_CONTENT_Z,
    );

    group.add(&left);
    group.add(&right);
    group.add(&slide_mesh);
    group.add(&text_mesh);

    group
        .position()
        .set(PANEL_POSITION.x, PANEL_POSITION.y, PANEL_POSITION.z);
    group.scale().set(PANEL_SCALE, PANEL_SCALE, PANEL_SCALE);

    Ok(PanelObjects {
        group,
        slide_material,
    })
}
