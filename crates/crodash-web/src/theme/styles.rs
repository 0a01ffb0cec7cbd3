//! Embedded stylesheet.

use super::palette;

const RULES: &str = r#"
*{box-sizing:border-box}
body{margin:0;font-family:Inter,system-ui,sans-serif;background:var(--neutral-bg);color:var(--text-dark)}
.app{display:flex;min-height:100vh}
.app.mobile{flex-direction:column}
.sidebar{width:280px;flex-shrink:0;background:var(--primary-blue);color:#fff;padding:1.5rem 1rem;display:flex;flex-direction:column;gap:1rem}
.main-logo h1{font-size:1.25rem;margin:0 0 1rem}
.nav-section-title{font-size:.7rem;text-transform:uppercase;letter-spacing:.08em;opacity:.7;margin:1rem 0 .25rem}
.nav-link{display:block;padding:.5rem .75rem;border-radius:6px;color:#fff;text-decoration:none}
.nav-link:hover{background:rgba(255,255,255,.1)}
.nav-link.active{background:var(--secondary-emerald);font-weight:600}
.debug-toggle{border-top:1px solid rgba(255,255,255,.2);padding-top:1rem;font-size:.85rem}
.debug-toggle button{margin-top:.5rem}
.sidebar-footer{margin-top:auto;text-align:center;font-size:.75rem;opacity:.6}
.tab-strip{position:sticky;top:0;z-index:10;display:flex;overflow-x:auto;gap:.25rem;background:var(--card-bg);border-bottom:1px solid var(--border-light);padding:.5rem}
.tab{white-space:nowrap;padding:.5rem .75rem;border-radius:6px;color:var(--text-dark);text-decoration:none;font-size:.9rem}
.tab.active{background:var(--primary-blue);color:#fff}
.content{flex:1;padding:2rem;min-width:0}
.app.mobile .content{padding:1rem}
.page-header{margin-bottom:1.5rem}
.page-title{margin:0;font-size:1.75rem;color:var(--primary-blue)}
.page-subtitle{margin:.25rem 0 0;color:var(--text-medium)}
.content-section{background:var(--card-bg);border:1px solid var(--border-light);border-radius:8px;padding:1.25rem;margin-bottom:1.25rem}
.section-title{margin-top:0;font-size:1.1rem}
.metrics-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(180px,1fr));gap:1rem}
.metric-card{border:1px solid var(--border-light);border-radius:8px;padding:1rem;text-align:center}
.metric-value{font-size:1.75rem;font-weight:700}
.metric-label{color:var(--text-medium);font-size:.8rem;text-transform:uppercase}
.status-green{color:var(--status-green)}
.status-orange{color:var(--status-orange)}
.status-red{color:var(--status-red)}
.status-unknown{color:var(--status-unknown)}
table{width:100%;border-collapse:collapse}
th,td{text-align:left;padding:.5rem;border-bottom:1px solid var(--border-light)}
.progress{height:8px;background:var(--border-light);border-radius:4px;overflow:hidden}
.progress-bar{height:100%;background:var(--secondary-emerald)}
.notice{padding:.75rem 1rem;border-radius:6px;margin-bottom:1rem;background:#FEF3C7;color:#92400E}
.mobile-hint{background:#DBEAFE;color:#1E40AF}
.maintenance{border-left:4px solid var(--status-red)}
.muted{color:var(--text-medium)}
.tab.debug-exit{margin-left:auto;color:var(--status-red)}
.pillar-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(240px,1fr));gap:1rem}
.pillar-card{border:2px solid var(--border-light);border-radius:12px;padding:1rem}
.pillar-card h3{margin:0 0 .75rem;font-size:1.05rem}
.level-advanced{border-color:var(--status-green)}
.level-halfway{border-color:#F59E0B}
.level-started{border-color:var(--status-orange)}
.level-behind{border-color:var(--status-red)}
.task-breakdown{display:flex;justify-content:space-between;font-size:.85rem}
.filters{display:flex;flex-wrap:wrap;gap:.5rem;align-items:center;margin:1rem 0}
.filter{padding:.25rem .6rem;border:1px solid var(--border-light);border-radius:999px;color:var(--text-dark);text-decoration:none;font-size:.85rem}
.filter.active{background:var(--primary-blue);color:#fff}
.priority-actions li{border-left:4px solid var(--status-red);padding:.5rem .75rem;margin:.5rem 0}
"#;

/// Full stylesheet: palette variables followed by the rules
pub fn stylesheet() -> String {
    let variables: String = palette::CSS_VARIABLES
        .iter()
        .map(|(name, value)| format!("{}:{};", name, value))
        .collect();
    format!(":root{{{}}}{}", variables, RULES)
}
