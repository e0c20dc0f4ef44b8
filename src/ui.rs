use crate::models::WEEK_MAX;

pub fn render_tracker() -> String {
    TRACKER_HTML.replace("{{WEEKS}}", &WEEK_MAX.to_string())
}

pub fn render_settings() -> String {
    SETTINGS_HTML.replace("{{WEEKS}}", &WEEK_MAX.to_string())
}

const TRACKER_HTML: &str = r#"<!DOCTYPE html>
<html lang="sv">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Träning</title>
  <style>
    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 24px;
    }

    header {
      display: flex;
      justify-content: space-between;
      align-items: center;
      margin-bottom: 20px;
    }

    h1 { margin: 0; color: var(--accent-2); }

    a.nav {
      text-decoration: none;
      font-size: 1.4rem;
      padding: 8px 12px;
      border: 1px solid rgba(47, 72, 88, 0.25);
      border-radius: 12px;
      background: white;
      color: var(--accent-2);
    }

    .weeks {
      display: flex;
      gap: 16px;
      overflow-x: auto;
      padding-bottom: 12px;
    }

    .week { flex: 0 0 320px; }

    .week-toggle {
      width: 100%;
      text-align: left;
      font-size: 1.05rem;
      font-weight: 600;
      padding: 12px 16px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 14px;
      background: white;
      color: var(--accent-2);
      cursor: pointer;
    }

    .week-body {
      margin-top: 8px;
      background: var(--card);
      border: 1px solid rgba(47, 72, 88, 0.12);
      border-radius: 14px;
      padding: 12px;
      display: grid;
      gap: 8px;
    }

    .day {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 8px;
      background: rgba(47, 72, 88, 0.05);
      border-radius: 10px;
      padding: 10px;
    }

    .day-name { font-weight: 600; text-transform: capitalize; }
    .day-label { font-size: 0.82rem; color: #6b645d; }
    .day-icon { font-size: 1.5rem; }

    .day-actions { display: flex; flex-direction: column; gap: 4px; }

    .day-actions button {
      font-size: 0.78rem;
      padding: 4px 8px;
      border: 1px solid rgba(47, 72, 88, 0.3);
      border-radius: 8px;
      background: white;
      cursor: pointer;
    }

    .status { margin-top: 10px; min-height: 1.2em; color: #c63b2b; }
  </style>
</head>
<body data-weeks="{{WEEKS}}">
  <header>
    <h1>Träning</h1>
    <a class="nav" href="/settings" title="Inställningar">⚙</a>
  </header>

  <div class="weeks" id="weeks"></div>
  <div class="status" id="status"></div>

  <script>
    const weekCount = Number(document.body.dataset.weeks);
    const weeksEl = document.getElementById('weeks');
    const statusEl = document.getElementById('status');
    const labels = { daily: 'Dagligt', mag: 'Mage', challenge: 'Utmaning' };
    const open = { 1: true };

    const setStatus = (message) => {
      statusEl.textContent = message || '';
    };

    const dayRow = (week, row) => {
      const el = document.createElement('div');
      el.className = 'day';
      el.dataset.day = row.day;

      const info = document.createElement('div');
      info.innerHTML = `<div class="day-name">${row.day}</div>` +
        `<div class="day-label">${row.label}</div>`;

      const right = document.createElement('div');
      right.style.display = 'flex';
      right.style.alignItems = 'center';
      right.style.gap = '8px';

      const icon = document.createElement('span');
      icon.className = 'day-icon';
      icon.textContent = row.icon;
      right.appendChild(icon);

      const actions = document.createElement('div');
      actions.className = 'day-actions';
      if (!row.assigned.includes('rest')) {
        for (const category of ['daily', 'mag', 'challenge']) {
          if (!row.assigned.includes(category) || row.progress[category]) {
            continue;
          }
          const button = document.createElement('button');
          button.textContent = `${labels[category]} ✓`;
          button.addEventListener('click', () => complete(week, row.day, category, el));
          actions.appendChild(button);
        }
      }
      right.appendChild(actions);

      el.appendChild(info);
      el.appendChild(right);
      return el;
    };

    const complete = async (week, day, category, rowEl) => {
      const res = await fetch(`/api/week/${week}/day/${encodeURIComponent(day)}/complete`, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ category })
      });
      if (!res.ok) {
        setStatus(await res.text());
        return;
      }
      const row = await res.json();
      rowEl.replaceWith(dayRow(week, row));
      setStatus('');
    };

    const loadWeek = async (week, bodyEl) => {
      const res = await fetch(`/api/week/${week}/days`);
      if (!res.ok) {
        setStatus(await res.text());
        return;
      }
      const data = await res.json();
      bodyEl.innerHTML = '';
      for (const row of data.days) {
        bodyEl.appendChild(dayRow(week, row));
      }
    };

    const renderWeek = (week) => {
      const column = document.createElement('div');
      column.className = 'week';

      const toggle = document.createElement('button');
      toggle.className = 'week-toggle';
      toggle.textContent = `Vecka ${week}`;

      const body = document.createElement('div');
      body.className = 'week-body';
      body.hidden = !open[week];
      if (open[week]) {
        loadWeek(week, body);
      }

      toggle.addEventListener('click', () => {
        open[week] = !open[week];
        body.hidden = !open[week];
        if (open[week]) {
          loadWeek(week, body);
        }
      });

      column.appendChild(toggle);
      column.appendChild(body);
      weeksEl.appendChild(column);
    };

    for (let week = 1; week <= weekCount; week += 1) {
      renderWeek(week);
    }
  </script>
</body>
</html>
"#;

const SETTINGS_HTML: &str = r#"<!DOCTYPE html>
<html lang="sv">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Inställningar</title>
  <style>
    :root {
      --bg-1: #f8f3e6;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 24px;
    }

    header {
      display: flex;
      align-items: center;
      gap: 14px;
      margin-bottom: 20px;
    }

    h1 { margin: 0; color: var(--accent-2); }

    a.nav {
      text-decoration: none;
      font-size: 1.2rem;
      padding: 8px 12px;
      border: 1px solid rgba(47, 72, 88, 0.25);
      border-radius: 12px;
      background: white;
      color: var(--accent-2);
    }

    select, input {
      font: inherit;
      padding: 6px 8px;
      border: 1px solid rgba(47, 72, 88, 0.3);
      border-radius: 8px;
    }

    .grid {
      display: grid;
      gap: 16px;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    }

    .card {
      background: var(--card);
      border: 1px solid rgba(47, 72, 88, 0.12);
      border-radius: 14px;
      padding: 16px;
    }

    .card h2 { margin: 0 0 12px; font-size: 1.15rem; color: var(--accent-2); }

    .exercise {
      display: flex;
      align-items: center;
      gap: 8px;
      background: rgba(47, 72, 88, 0.05);
      border-radius: 10px;
      padding: 8px;
      margin-bottom: 6px;
    }

    .exercise .meta { flex: 1; }
    .exercise .meta .name { font-weight: 600; }
    .exercise .meta .content { font-size: 0.82rem; color: #6b645d; }

    .exercise button {
      border: none;
      background: transparent;
      cursor: pointer;
      font-size: 1rem;
    }

    .add-form { display: grid; gap: 6px; margin-top: 10px; }
    .add-form .row { display: flex; gap: 6px; }
    .add-form input[name="name"] { flex: 2; }
    .add-form input[name="rounds"] { width: 70px; }

    .add-form button {
      font: inherit;
      font-weight: 600;
      padding: 8px;
      border: none;
      border-radius: 10px;
      background: var(--accent);
      color: white;
      cursor: pointer;
    }

    .schedule-day {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 8px;
      padding: 8px;
      border-radius: 10px;
      background: rgba(47, 72, 88, 0.05);
      margin-bottom: 6px;
    }

    .schedule-day .name { font-weight: 600; text-transform: capitalize; width: 80px; }

    .schedule-day button {
      font-size: 0.8rem;
      padding: 4px 8px;
      border: 1px solid rgba(47, 72, 88, 0.3);
      border-radius: 999px;
      background: white;
      cursor: pointer;
    }

    .schedule-day button.active {
      background: var(--accent-2);
      border-color: var(--accent-2);
      color: white;
    }

    .status { margin-top: 12px; min-height: 1.2em; color: #c63b2b; }
    .hint { margin-top: 16px; font-size: 0.88rem; color: #6f6a65; }
  </style>
</head>
<body data-weeks="{{WEEKS}}">
  <header>
    <a class="nav" href="/" title="Tillbaka">←</a>
    <h1>Inställningar</h1>
    <label>Vecka
      <select id="week-select"></select>
    </label>
  </header>

  <div class="grid" id="catalogs"></div>

  <div class="card" style="margin-top: 16px;">
    <h2>Veckoschema</h2>
    <div id="schedule"></div>
  </div>

  <div class="status" id="status"></div>
  <p class="hint">💡 Flytta övningar med pilarna. Vilodag rensar dagens övriga pass.</p>

  <script>
    const weekCount = Number(document.body.dataset.weeks);
    const weekSelect = document.getElementById('week-select');
    const catalogsEl = document.getElementById('catalogs');
    const scheduleEl = document.getElementById('schedule');
    const statusEl = document.getElementById('status');

    const days = ['måndag', 'tisdag', 'onsdag', 'torsdag', 'fredag', 'lördag', 'söndag'];
    const catalogs = [
      { category: 'daily', field: 'dailyExercises', title: '🙌 Dagliga pass' },
      { category: 'mag', field: 'magExercises', title: '💪 Magpass' },
      { category: 'challenge', field: 'challengeExercises', title: '🔥 Utmaningar' }
    ];
    const scheduleButtons = [
      { category: 'daily', label: 'Dagligt' },
      { category: 'mag', label: 'Mage' },
      { category: 'challenge', label: 'Utmaning' },
      { category: 'rest', label: 'Vilodag' }
    ];

    let currentWeek = 1;

    const setStatus = (message) => {
      statusEl.textContent = message || '';
    };

    const currentWeekUrl = (suffix) => `/api/week/${currentWeek}${suffix}`;

    const removeExercise = async (category, id) => {
      const res = await fetch(currentWeekUrl(`/exercise/${category}/${encodeURIComponent(id)}`), {
        method: 'DELETE'
      });
      if (!res.ok) {
        setStatus(await res.text());
        return;
      }
      load();
    };

    const reorder = async (category, from, to) => {
      const res = await fetch(currentWeekUrl('/exercise/reorder'), {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ category, from, to })
      });
      if (!res.ok) {
        setStatus(await res.text());
        return;
      }
      load();
    };

    const addExercise = async (category, form) => {
      const name = form.elements.name.value;
      const content = form.elements.content.value;
      const rounds = Number(form.elements.rounds.value) || 0;
      const res = await fetch(currentWeekUrl('/exercise'), {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ category, name, content, rounds })
      });
      if (!res.ok) {
        setStatus(await res.text());
        return;
      }
      form.reset();
      setStatus('');
      load();
    };

    const renderCatalog = (group, data) => {
      const card = document.createElement('div');
      card.className = 'card';
      card.innerHTML = `<h2>${group.title}</h2>`;

      const entries = data[group.field];
      entries.forEach((exercise, index) => {
        const row = document.createElement('div');
        row.className = 'exercise';

        const meta = document.createElement('div');
        meta.className = 'meta';
        meta.innerHTML = `<div class="name">${exercise.icon} ${exercise.name}</div>` +
          `<div class="content">${exercise.content} · ${exercise.rounds} ronder</div>`;
        row.appendChild(meta);

        const up = document.createElement('button');
        up.textContent = '↑';
        up.disabled = index === 0;
        up.addEventListener('click', () => reorder(group.category, index, index - 1));

        const down = document.createElement('button');
        down.textContent = '↓';
        down.disabled = index === entries.length - 1;
        down.addEventListener('click', () => reorder(group.category, index, index + 1));

        const remove = document.createElement('button');
        remove.textContent = '🗑';
        remove.addEventListener('click', () => removeExercise(group.category, exercise.id));

        row.appendChild(up);
        row.appendChild(down);
        row.appendChild(remove);
        card.appendChild(row);
      });

      const form = document.createElement('form');
      form.className = 'add-form';
      form.innerHTML =
        '<div class="row">' +
        '<input name="name" placeholder="Nytt pass..." />' +
        '<input name="rounds" type="number" min="1" value="1" />' +
        '</div>' +
        '<input name="content" placeholder="Beskrivning..." />' +
        '<button type="submit">+ Lägg till</button>';
      form.addEventListener('submit', (event) => {
        event.preventDefault();
        addExercise(group.category, form);
      });
      card.appendChild(form);

      return card;
    };

    const renderSchedule = (schedule) => {
      scheduleEl.innerHTML = '';
      for (const day of days) {
        const assigned = schedule[day] || [];
        const row = document.createElement('div');
        row.className = 'schedule-day';
        row.innerHTML = `<span class="name">${day}</span>`;

        const buttons = document.createElement('div');
        for (const group of scheduleButtons) {
          const button = document.createElement('button');
          button.textContent = group.label;
          button.classList.toggle('active', assigned.includes(group.category));
          button.addEventListener('click', () => toggleDay(day, group.category));
          buttons.appendChild(button);
        }
        row.appendChild(buttons);
        scheduleEl.appendChild(row);
      }
    };

    const toggleDay = async (day, category) => {
      const res = await fetch(currentWeekUrl('/schedule/toggle'), {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ day, category })
      });
      if (!res.ok) {
        setStatus(await res.text());
        return;
      }
      load();
    };

    const load = async () => {
      const res = await fetch(currentWeekUrl(''));
      if (!res.ok) {
        setStatus(await res.text());
        return;
      }
      const data = await res.json();
      catalogsEl.innerHTML = '';
      for (const group of catalogs) {
        catalogsEl.appendChild(renderCatalog(group, data));
      }
      renderSchedule(data.schedule);
    };

    for (let week = 1; week <= weekCount; week += 1) {
      const option = document.createElement('option');
      option.value = week;
      option.textContent = week;
      weekSelect.appendChild(option);
    }
    weekSelect.addEventListener('change', () => {
      currentWeek = Number(weekSelect.value);
      load();
    });

    load().catch((err) => setStatus(err.message));
  </script>
</body>
</html>
"#;
