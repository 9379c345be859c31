//! Embedded dashboard page.
//!
//! The page is static. On load it fetches `/v1/dashboard` to fill the site
//! dropdown and size the payload sliders, then re-fetches chart data from
//! `/v1/charts/*` whenever a control changes and hands it to Plotly.js.

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>SpaceX Launch Records Dashboard</title>
    <script src="https://cdn.plot.ly/plotly-2.27.0.min.js"></script>
    <style>
        * { box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 0;
            padding: 20px;
            background: #f5f5f5;
        }
        h1 { text-align: center; color: #503D36; font-size: 40px; }
        .panel {
            background: white;
            padding: 15px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
            margin-bottom: 20px;
        }
        label { font-weight: 600; display: block; margin-bottom: 5px; color: #555; }
        select {
            width: 100%;
            padding: 8px;
            border: 1px solid #ddd;
            border-radius: 4px;
            font-size: 14px;
        }
        .sliders { display: flex; gap: 20px; align-items: center; }
        .sliders input { flex: 1; }
        .chart { height: 450px; }
        .status { color: #666; font-size: 14px; }
    </style>
</head>
<body>
    <h1>SpaceX Launch Records Dashboard</h1>

    <div class="panel">
        <label for="site-dropdown">Launch Site</label>
        <select id="site-dropdown"></select>
        <div class="status" id="status">Loading dataset...</div>
    </div>

    <div class="panel"><div id="success-pie-chart" class="chart"></div></div>

    <div class="panel">
        <label>Payload range (Kg): <span id="payload-label"></span></label>
        <div class="sliders">
            <input type="range" id="payload-low" step="any">
            <input type="range" id="payload-high" step="any">
        </div>
    </div>

    <div class="panel"><div id="success-payload-scatter-chart" class="chart"></div></div>

    <script>
        const siteSelect = document.getElementById('site-dropdown');
        const lowInput = document.getElementById('payload-low');
        const highInput = document.getElementById('payload-high');
        const status = document.getElementById('status');

        // Only the newest request per chart may draw it.
        let pieSeq = 0;
        let scatterSeq = 0;

        async function fetchJson(url) {
            const response = await fetch(url);
            if (!response.ok) {
                const body = await response.json().catch(() => ({}));
                throw new Error(body.message || response.statusText);
            }
            return response.json();
        }

        async function loadDashboard() {
            try {
                const info = await fetchJson('/v1/dashboard');
                siteSelect.replaceChildren();
                for (const site of ['ALL', ...info.sites]) {
                    siteSelect.add(new Option(site, site));
                }
                siteSelect.value = 'ALL';

                for (const input of [lowInput, highInput]) {
                    input.min = info.min_payload;
                    input.max = info.max_payload;
                }
                lowInput.value = info.min_payload;
                highInput.value = info.max_payload;

                status.textContent = `${info.record_count} launches`;
                await Promise.all([updatePie(), updateScatter()]);
            } catch (err) {
                status.textContent = 'Error: ' + err.message;
            }
        }

        async function updatePie() {
            const site = encodeURIComponent(siteSelect.value);
            const seq = ++pieSeq;
            const data = await fetchJson(`/v1/charts/pie?site=${site}`);
            if (seq !== pieSeq) return;
            const trace = {
                type: 'pie',
                labels: data.entries.map(e => e.label),
                values: data.entries.map(e => e.count),
                marker: { colors: data.entries.map(e => e.color) },
                sort: false
            };
            Plotly.react('success-pie-chart', [trace], { title: data.title });
        }

        async function updateScatter() {
            const site = encodeURIComponent(siteSelect.value);
            const low = Number(lowInput.value);
            const high = Number(highInput.value);
            document.getElementById('payload-label').textContent = `${low} - ${high}`;

            const seq = ++scatterSeq;
            const data = await fetchJson(`/v1/charts/scatter?site=${site}&low=${low}&high=${high}`);
            if (seq !== scatterSeq) return;
            const traces = data.categories.map(category => {
                const points = data.points.filter(p => p.booster_category === category);
                return {
                    type: 'scatter',
                    mode: 'markers',
                    name: category,
                    x: points.map(p => p.payload_mass_kg),
                    y: points.map(p => p.class)
                };
            });
            const layout = {
                title: data.title,
                xaxis: { title: 'Payload Mass (kg)' },
                yaxis: { title: 'class', tickvals: [0, 1] },
                legend: { title: { text: 'Booster Version Category' } }
            };
            Plotly.react('success-payload-scatter-chart', traces, layout);
        }

        function report(promise) {
            promise.catch(err => { status.textContent = 'Error: ' + err.message; });
        }

        siteSelect.addEventListener('change', () => {
            report(updatePie());
            report(updateScatter());
        });
        lowInput.addEventListener('input', () => report(updateScatter()));
        highInput.addEventListener('input', () => report(updateScatter()));

        loadDashboard();
    </script>
</body>
</html>
"##;
