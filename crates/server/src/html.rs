//! Embedded dashboard page.
//!
//! Kept as a `&'static str` so the binary serves it without filesystem
//! lookups. Map tiles and Leaflet itself load from public CDNs.

pub const DASHBOARD_HTML: &str = r#"<!doctype html>
<html lang="en">

<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Flood Cases in Kenya</title>

  <!-- Leaflet 1.9.4 -->
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css" crossorigin="anonymous"
    referrerpolicy="no-referrer" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js" crossorigin="anonymous"
    referrerpolicy="no-referrer"></script>

  <style>
    body { font-family: system-ui, sans-serif; margin: 1rem 2rem; color: #0f172a; }
    #map { width: 100%; border: 1px solid #cbd5e1; }
    .report-form { display: flex; gap: 0.75rem; align-items: center; margin-top: 1rem; }
    .report-form input[type=number] { width: 4rem; }
    #report-message { margin-top: 0.75rem; min-height: 1.25rem; }
    #report-message.error { color: #b91c1c; }
  </style>
</head>

<body>
  <h1 id="title">Flood Cases in Kenya</h1>

  <div id="map"></div>

  <div class="report-form">
    <input id="map-click" type="hidden" value="" />
    <label for="severity-input">Severity (1-5):</label>
    <input id="severity-input" type="number" min="1" max="5" value="3" />
    <button id="add-button" type="button">Add Flood</button>
  </div>
  <div id="report-message"></div>

  <script>
    (async function () {
      const pendingInput = document.getElementById("map-click");
      const severityInput = document.getElementById("severity-input");
      const addButton = document.getElementById("add-button");
      const messageBox = document.getElementById("report-message");
      let nClicks = 0;

      async function postJson(url, body) {
        const res = await fetch(url, {
          method: "POST",
          headers: { "Content-Type": "application/json" },
          body: JSON.stringify(body),
        });
        const text = await res.text();
        let data;
        try {
          data = JSON.parse(text);
        } catch (_) {
          data = { error: text || res.statusText };
        }
        if (!res.ok) {
          throw new Error(data.error || res.statusText);
        }
        return data;
      }

      const view = await (await fetch("/api/map")).json();
      document.getElementById("title").textContent = view.title;
      document.title = view.title;
      severityInput.min = view.severity_min;
      severityInput.max = view.severity_max;
      severityInput.value = view.severity_default;

      const mapEl = document.getElementById("map");
      mapEl.style.height = view.height;
      const map = L.map(mapEl).setView(view.center, view.zoom);
      L.tileLayer("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", {
        maxZoom: 19,
        attribution: "&copy; OpenStreetMap contributors",
      }).addTo(map);

      const reportLayer = L.layerGroup().addTo(map);
      const draftMarker = L.marker([0, 0], { draggable: true })
        .bindTooltip("Severity: " + severityInput.value)
        .addTo(map);

      function renderMarkers(markers) {
        reportLayer.clearLayers();
        for (const marker of markers) {
          L.marker(marker.position).bindTooltip(marker.tooltip).addTo(reportLayer);
        }
      }

      function showMessage(text, isError) {
        messageBox.textContent = text;
        messageBox.classList.toggle("error", Boolean(isError));
      }

      async function recordClick(latlng) {
        const body = latlng ? { lat_lng: [latlng.lat, latlng.lng] } : {};
        const { pending } = await postJson("/api/map/click", body);
        pendingInput.value = pending;
        if (latlng) {
          draftMarker.setLatLng(latlng);
        }
      }

      map.on("click", (e) => recordClick(e.latlng).catch((err) => showMessage(err.message, true)));
      draftMarker.on("dragend", () =>
        recordClick(draftMarker.getLatLng()).catch((err) => showMessage(err.message, true)));
      severityInput.addEventListener("input", () =>
        draftMarker.setTooltipContent("Severity: " + severityInput.value));

      addButton.addEventListener("click", async () => {
        nClicks += 1;
        const raw = severityInput.value.trim();
        const severity = raw === "" ? null : Number(raw);
        try {
          const resp = await postJson("/api/reports", {
            n_clicks: nClicks,
            pending: pendingInput.value,
            severity: Number.isFinite(severity) ? severity : null,
          });
          if (resp.markers) {
            renderMarkers(resp.markers);
          }
          showMessage(resp.message, false);
        } catch (err) {
          showMessage(err.message, true);
        }
      });

      renderMarkers(await (await fetch("/api/markers")).json());
    })();
  </script>
</body>

</html>
"#;
