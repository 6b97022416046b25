use super::{OutputRecord, NO_MATCHES_MESSAGE};

fn json_for_script_tag(value: &str) -> String {
    value.replace("</", "<\\/")
}

pub fn render_html(records: &[OutputRecord]) -> Vec<u8> {
    let json = serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string());
    let json = json_for_script_tag(&json);

    let html = format!(
        r####"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <meta content="width=device-width, initial-scale=1.0" name="viewport"/>
  <title>Product Categories</title>
  <script src="https://cdn.tailwindcss.com?plugins=forms,container-queries"></script>
  <link href="https://fonts.googleapis.com/css2?family=Material+Symbols+Outlined:wght,FILL@100..700,0..1&amp;display=swap" rel="stylesheet"/>
  <link href="https://fonts.googleapis.com/css2?family=Montserrat:wght@700;800&amp;family=Inter:wght@400;500;600;700&amp;display=swap" rel="stylesheet"/>
  <script id="tailwind-config">
    tailwind.config = {{
      darkMode: "class",
      theme: {{
        extend: {{
          colors: {{
            "primary": "#135bec",
            "background-light": "#f8fafc",
            "background-dark": "#0f172a"
          }},
          fontFamily: {{
            "sans": ["Inter", "sans-serif"],
            "display": ["Montserrat", "sans-serif"]
          }},
          borderRadius: {{
            "DEFAULT": "0.375rem",
            "lg": "0.5rem",
            "xl": "0.75rem",
            "2xl": "1rem",
            "full": "9999px"
          }}
        }}
      }}
    }};
  </script>
  <style type="text/tailwindcss">
    .material-symbols-outlined {{
      font-variation-settings: 'FILL' 0, 'wght' 400, 'GRAD' 0, 'opsz' 24;
    }}
    body {{
      font-family: 'Inter', sans-serif;
    }}
    h1, h2, h3, .font-bold-display {{
      font-family: 'Montserrat', sans-serif;
      font-weight: 800;
      letter-spacing: -0.025em;
    }}
  </style>
</head>
<body class="bg-background-light dark:bg-background-dark text-slate-900 dark:text-slate-100 min-h-screen transition-colors duration-200">
  <script type="application/json" id="records-data">{json}</script>
  <div class="layout-container flex h-full grow flex-col">
    <header class="flex items-center justify-between border-b border-slate-200 dark:border-slate-800 bg-white dark:bg-slate-900 px-8 py-4 sticky top-0 z-50">
      <div class="flex items-center gap-4">
        <div class="size-10 bg-primary rounded-xl flex items-center justify-center text-white shadow-lg shadow-primary/20">
          <span class="material-symbols-outlined text-[24px]">storefront</span>
        </div>
        <h2 class="text-slate-900 dark:text-white text-xl font-display uppercase tracking-tight">Product Categories</h2>
      </div>
      <div class="flex items-center gap-3">
        <button id="theme-toggle" class="flex size-10 cursor-pointer items-center justify-center overflow-hidden rounded-xl bg-slate-100 dark:bg-slate-800 text-slate-600 dark:text-white hover:bg-slate-200 dark:hover:bg-slate-700 transition-colors" type="button">
          <span id="theme-icon" class="material-symbols-outlined">light_mode</span>
        </button>
      </div>
    </header>

    <main class="flex-1 max-w-[1100px] mx-auto w-full px-8 py-10">
      <div class="bg-white dark:bg-slate-900 rounded-2xl border border-slate-200 dark:border-slate-800 p-5 mb-8 shadow-sm">
        <p class="text-[11px] font-display text-slate-900 dark:text-slate-200 uppercase tracking-widest mb-4">Filters</p>

        <div id="owner-buttons" class="flex flex-wrap items-center gap-2 mb-4"></div>

        <div class="flex flex-1 min-w-[320px] items-center gap-3 bg-slate-50 dark:bg-slate-800/50 rounded-xl px-4 py-3 border border-slate-200 dark:border-slate-700 focus-within:border-primary focus-within:ring-2 focus-within:ring-primary/10 transition-all mb-4">
          <span class="material-symbols-outlined text-slate-400">search</span>
          <input id="search" class="bg-transparent border-none focus:ring-0 text-sm w-full text-slate-900 dark:text-white placeholder:text-slate-400 font-medium" placeholder="Search" type="text"/>
          <button id="search-clear" class="hidden text-slate-400 hover:text-slate-600 dark:hover:text-slate-200 transition-colors" type="button">
            <span class="material-symbols-outlined text-[20px]">close</span>
          </button>
        </div>

        <button id="reset-filters" class="w-full text-center text-xs font-bold uppercase tracking-widest text-primary border border-primary/40 rounded-xl px-4 py-3 hover:bg-primary hover:text-white transition-colors" type="button">
          Reset all filters
        </button>
      </div>

      <noscript>
        <div class="bg-amber-50 dark:bg-amber-900/20 border border-amber-200 dark:border-amber-900/30 rounded-2xl p-5 mb-8">
          <div class="text-amber-800 dark:text-amber-300 font-bold">This report requires JavaScript to render results.</div>
        </div>
      </noscript>

      <div class="bg-white dark:bg-slate-900 border border-slate-200 dark:border-slate-800 rounded-2xl overflow-hidden shadow-sm">
        <div id="table-view" class="overflow-x-auto">
          <table class="w-full text-left border-collapse">
            <thead>
              <tr class="bg-slate-50 dark:bg-slate-800/50 border-b border-slate-200 dark:border-slate-800">
                <th class="px-6 py-5 text-[11px] font-display text-slate-900 dark:text-slate-200 uppercase tracking-widest">ID</th>
                <th class="px-6 py-5 text-[11px] font-display text-slate-900 dark:text-slate-200 uppercase tracking-widest">Product</th>
                <th class="px-6 py-5 text-[11px] font-display text-slate-900 dark:text-slate-200 uppercase tracking-widest">Category</th>
                <th class="px-6 py-5 text-[11px] font-display text-slate-900 dark:text-slate-200 uppercase tracking-widest">User</th>
              </tr>
            </thead>
            <tbody id="table-body" class="divide-y divide-slate-100 dark:divide-slate-800"></tbody>
          </table>
        </div>

        <div id="empty-state" class="hidden px-8 py-10">
          <p class="text-sm font-medium text-slate-500 dark:text-slate-400">{empty_message}</p>
        </div>

        <div class="px-8 py-5 border-t border-slate-100 dark:border-slate-800 bg-slate-50 dark:bg-slate-800/50">
          <p id="results-total" class="text-sm text-slate-500 dark:text-slate-400 font-bold">0 PRODUCTS</p>
        </div>
      </div>
    </main>

    <footer class="mt-auto py-8 border-t border-slate-200 dark:border-slate-800 text-center">
      <p class="text-xs font-bold text-slate-400 dark:text-slate-500 uppercase tracking-widest">PRODCAT REPORT</p>
    </footer>
  </div>

  <script>
    (function() {{
      function escapeHtml(value) {{
        return String(value)
          .replaceAll('&', '&amp;')
          .replaceAll('<', '&lt;')
          .replaceAll('>', '&gt;')
          .replaceAll('"', '&quot;')
          .replaceAll("'", '&#39;');
      }}

      function uniqueOwners(records) {{
        const s = new Set();
        for (const r of records) {{
          const t = String(r.owner || '').trim();
          if (!t) continue;
          s.add(t);
        }}
        const out = Array.from(s);
        out.sort((a, b) => a.localeCompare(b));
        return out;
      }}

      const raw = document.getElementById('records-data').textContent || '[]';
      const records = JSON.parse(raw);

      const htmlEl = document.documentElement;
      const themeIcon = document.getElementById('theme-icon');
      function setTheme(mode) {{
        if (mode === 'dark') {{
          htmlEl.classList.add('dark');
          themeIcon.textContent = 'dark_mode';
        }} else {{
          htmlEl.classList.remove('dark');
          themeIcon.textContent = 'light_mode';
        }}
        localStorage.setItem('pc-theme', mode);
      }}
      const storedTheme = localStorage.getItem('pc-theme');
      if (storedTheme === 'dark' || storedTheme === 'light') {{
        setTheme(storedTheme);
      }} else {{
        setTheme(window.matchMedia && window.matchMedia('(prefers-color-scheme: dark)').matches ? 'dark' : 'light');
      }}
      document.getElementById('theme-toggle').addEventListener('click', function() {{
        setTheme(htmlEl.classList.contains('dark') ? 'light' : 'dark');
      }});

      const tableBody = document.getElementById('table-body');
      const tableView = document.getElementById('table-view');
      const emptyState = document.getElementById('empty-state');
      const resultsTotal = document.getElementById('results-total');
      const searchEl = document.getElementById('search');
      const searchClear = document.getElementById('search-clear');
      const ownerHost = document.getElementById('owner-buttons');
      const resetEl = document.getElementById('reset-filters');

      const state = {{
        query: '',
        owner: ''
      }};

      const activeClass = 'px-4 py-2 rounded-lg bg-primary text-white text-xs font-bold transition-all';
      const idleClass = 'px-4 py-2 rounded-lg bg-slate-100 dark:bg-slate-800 text-slate-600 dark:text-slate-300 text-xs font-bold hover:bg-slate-200 dark:hover:bg-slate-700 transition-all';

      function ownerButton(label, value) {{
        const btn = document.createElement('button');
        btn.type = 'button';
        btn.textContent = label;
        btn.dataset.owner = value;
        btn.addEventListener('click', function() {{
          state.owner = value;
          render();
        }});
        ownerHost.appendChild(btn);
      }}

      ownerButton('All', '');
      for (const owner of uniqueOwners(records)) {{
        ownerButton(owner, owner);
      }}

      // same contract as the library filter: case-insensitive substring
      // on the product name, exact match on the owner.
      function recordMatches(r) {{
        const q = state.query.trim().toLowerCase();
        if (q && !String(r.name || '').toLowerCase().includes(q)) return false;
        if (state.owner && String(r.owner || '') !== state.owner) return false;
        return true;
      }}

      function ownerClass(sex) {{
        if (sex === 'm') return 'text-blue-600 dark:text-blue-400 font-medium';
        if (sex === 'f') return 'text-rose-600 dark:text-rose-400 font-medium';
        return '';
      }}

      function render() {{
        for (const btn of ownerHost.querySelectorAll('button')) {{
          btn.className = btn.dataset.owner === state.owner ? activeClass : idleClass;
        }}
        searchClear.classList.toggle('hidden', state.query === '');

        const visible = records.filter(recordMatches);
        tableBody.innerHTML = '';
        for (const r of visible) {{
          const tr = document.createElement('tr');
          tr.innerHTML = [
            `<td class="px-6 py-4 text-sm font-bold">${{escapeHtml(r.id)}}</td>`,
            `<td class="px-6 py-4 text-sm">${{escapeHtml(r.name)}}</td>`,
            `<td class="px-6 py-4 text-sm">${{escapeHtml(r.category_icon)}} - ${{escapeHtml(r.category)}}</td>`,
            `<td class="px-6 py-4 text-sm ${{ownerClass(r.owner_sex)}}">${{escapeHtml(r.owner)}}</td>`
          ].join('');
          tableBody.appendChild(tr);
        }}

        tableView.classList.toggle('hidden', visible.length === 0);
        emptyState.classList.toggle('hidden', visible.length !== 0);
        resultsTotal.textContent = `${{visible.length}} PRODUCTS`;
      }}

      searchEl.addEventListener('input', function() {{
        state.query = searchEl.value;
        render();
      }});
      searchClear.addEventListener('click', function() {{
        state.query = '';
        searchEl.value = '';
        render();
      }});
      resetEl.addEventListener('click', function() {{
        state.query = '';
        state.owner = '';
        searchEl.value = '';
        render();
      }});

      render();
    }})();
  </script>
</body>
</html>
"####,
        json = json,
        empty_message = NO_MATCHES_MESSAGE,
    );

    html.into_bytes()
}
