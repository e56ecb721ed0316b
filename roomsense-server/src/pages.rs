use std::fmt::Write;

use roomsense_api::{SensorCatalog, SensorDescriptor};

const DASHBOARD_TITLE: &str = "Monitoreo de la Biblioteca";

pub fn dashboard(catalog: &SensorCatalog) -> String {
    let mut cards = String::new();
    for descriptor in catalog.iter() {
        let _ = write!(
            cards,
            r#"<a class="card" href="{path}"><div class="icon">{icon}</div><h2>{name}</h2></a>"#,
            path = escape(descriptor.path),
            icon = descriptor.icon,
            name = escape(descriptor.name),
        );
    }

    layout(
        DASHBOARD_TITLE,
        &format!(r#"<main class="dashboard"><h1>{DASHBOARD_TITLE}</h1><div class="grid">{cards}</div></main>"#),
    )
}

pub fn sensor(descriptor: &SensorDescriptor) -> String {
    let body = format!(
        r#"<main class="sensor" data-stream="/api/sensors/{kind}/stream" data-unit="{unit}">
<div id="loading" class="loading"><div class="spinner"></div><p>Cargando datos del sensor...</p></div>
<div id="view" hidden>
<a class="back" href="/">&larr; Volver al Dashboard</a>
<section class="panel">
<div class="icon">{icon}</div>
<h1>{title}</h1>
<div class="reading">
<div class="value"><span id="value">--</span><span class="unit">{unit}</span></div>
<div id="label" class="label"></div>
<div class="bar"><div id="bar" class="fill"></div></div>
</div>
<div class="history">
<h3>Historial (últimos 10 valores)</h3>
<div id="history" class="chips"></div>
</div>
</section>
</div>
</main>
<script src="/assets/sensor.js"></script>"#,
        kind = descriptor.kind,
        unit = escape(descriptor.unit),
        icon = descriptor.icon,
        title = escape(descriptor.title),
    );

    layout(descriptor.title, &body)
}

pub fn not_found() -> String {
    layout(
        "Página no encontrada",
        r#"<main class="dashboard"><h1>Página no encontrada</h1><a class="back" href="/">&larr; Volver al Dashboard</a></main>"#,
    )
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/assets/styles.css">
</head>
<body>
{body}
</body>
</html>"#,
        title = escape(title),
    )
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use roomsense_api::models::SensorKind;

    use super::*;

    #[test]
    fn test_dashboard_links_every_sensor() {
        let html = dashboard(&SensorCatalog::builtin());

        assert!(html.contains(DASHBOARD_TITLE));
        for path in ["/temperature", "/noise", "/light", "/air"] {
            assert!(html.contains(&format!(r#"href="{path}""#)), "missing {path}");
        }
    }

    #[test]
    fn test_sensor_page_points_at_stream() {
        let catalog = SensorCatalog::builtin();
        let html = sensor(catalog.get(SensorKind::Air));

        assert!(html.contains("Sensor de Pureza del Aire"));
        assert!(html.contains(r#"data-stream="/api/sensors/air/stream""#));
        assert!(html.contains(r#"data-unit=" PPM CO2""#));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
