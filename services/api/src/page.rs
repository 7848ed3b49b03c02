use salary_insights::salaries::ChartTheme;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const INDEX_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>Data Science Salaries Dashboard</title>
  <script src="__PLOTLY__"></script>
  <style>
    body { font-family: Arial, sans-serif; margin: 24px auto; max-width: 1100px; padding: 0 12px;
           background: __BACKGROUND__; color: __FONT_COLOR__; }
    h1 { text-align: center; }
    select { width: 50%; padding: 8px; }
    .chart { min-height: 420px; margin: 18px 0; }
    #error { color: #f0635c; }
  </style>
</head>
<body>
  <h1>Data Science Salaries Dashboard</h1>
  <select id="job_title_dropdown"></select>
  <p id="error"></p>
  <div class="chart" id="salary_trend_graph"></div>
  <div class="chart" id="top_paying_jobs"></div>
  <div class="chart" id="salary_distribution_experience"></div>
  <div class="chart" id="salary_by_company_size"></div>
  <script>
    const dropdown = document.getElementById('job_title_dropdown');
    const errorBox = document.getElementById('error');

    function traces(chart) {
      return chart.series.map((series) => {
        const xs = series.points.map((p) => (p.label ? p.label : p.x));
        const ys = series.points.map((p) => p.y);
        if (chart.kind === 'box') {
          return { type: 'box', name: series.name, x: xs, y: ys, marker: { color: series.color } };
        }
        if (chart.kind === 'bar') {
          return { type: 'bar', name: series.name, x: xs, y: ys, marker: { color: series.color } };
        }
        return {
          type: 'scatter', name: series.name, x: xs, y: ys,
          mode: chart.markers ? 'lines+markers' : 'lines', line: { color: series.color },
        };
      });
    }

    function draw(chart) {
      Plotly.react(chart.id, traces(chart), {
        title: chart.title,
        xaxis: { title: chart.x_axis.label },
        yaxis: { title: chart.y_axis.label },
        paper_bgcolor: chart.style.background,
        plot_bgcolor: chart.style.background,
        font: { color: chart.style.font_color },
        showlegend: chart.kind === 'box',
      });
    }

    async function render(jobTitle) {
      const response = await fetch('/api/v1/dashboard?job_title=' + encodeURIComponent(jobTitle));
      const body = await response.json();
      if (!response.ok) {
        errorBox.textContent = body.error;
        return;
      }
      errorBox.textContent = '';
      [body.trend, body.top_paying, body.experience_distribution, body.company_size].forEach(draw);
    }

    async function init() {
      const response = await fetch('/api/v1/job-titles');
      const body = await response.json();
      if (!response.ok) {
        errorBox.textContent = body.error;
        return;
      }
      body.job_titles.forEach((title) => {
        const option = document.createElement('option');
        option.value = title;
        option.textContent = title;
        dropdown.appendChild(option);
      });
      dropdown.value = body.default_job_title;
      dropdown.addEventListener('change', () => render(dropdown.value));
      await render(body.default_job_title);
    }

    init();
  </script>
</body>
</html>
"#;

pub(crate) fn render(theme: ChartTheme) -> String {
    let style = theme.style();
    INDEX_TEMPLATE
        .replace("__PLOTLY__", PLOTLY_CDN)
        .replace("__BACKGROUND__", style.background)
        .replace("__FONT_COLOR__", style.font_color)
}
