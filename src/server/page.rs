//! Single-page front end: two name boxes, two weapon radio groups, a Fight button.

pub fn index_html() -> &'static str {
    r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>Heroes vs. Villains</title>
  <style>
    body { font-family: Arial, sans-serif; max-width: 760px; margin: 24px auto; padding: 0 12px; }
    .sides { display: flex; gap: 16px; }
    .card { flex: 1; border: 1px solid #ddd; border-radius: 8px; padding: 14px; }
    label { display: block; margin: 6px 0; }
    input[type=text] { width: 100%; padding: 8px; box-sizing: border-box; }
    button { margin-top: 16px; padding: 10px 20px; font-size: 1.1rem; }
    #outcome { margin-top: 16px; min-height: 2em; font-weight: 600; }
  </style>
</head>
<body>
  <h1>Heroes vs. Villains</h1>
  <div class="sides">
    <div class="card">
      <strong>Hero</strong>
      <input id="hero-name" type="text" maxlength="32" placeholder="Name" />
      <label><input type="radio" name="hero-weapon" value="sword" /> Sword</label>
      <label><input type="radio" name="hero-weapon" value="bow" /> Bow</label>
      <label><input type="radio" name="hero-weapon" value="book o' spells" /> Book o' spells</label>
      <div id="hero-wins">Wins: 0</div>
      <div id="hero-losses">Losses: 0</div>
    </div>
    <div class="card">
      <strong>Villain</strong>
      <input id="villain-name" type="text" maxlength="32" placeholder="Name" />
      <label><input type="radio" name="villain-weapon" value="sword" /> Sword</label>
      <label><input type="radio" name="villain-weapon" value="bow" /> Bow</label>
      <label><input type="radio" name="villain-weapon" value="book o' spells" /> Book o' spells</label>
      <div id="villain-wins">Wins: 0</div>
      <div id="villain-losses">Losses: 0</div>
    </div>
  </div>
  <button id="fight-btn">Fight!</button>
  <div id="outcome"></div>
  <script>
    const outcome = document.getElementById('outcome');
    function picked(group) {
      const el = document.querySelector('input[name="' + group + '"]:checked');
      return el ? el.value : null;
    }
    function showBoard(board) {
      document.getElementById('hero-wins').textContent = 'Wins: ' + board.hero.wins;
      document.getElementById('hero-losses').textContent = 'Losses: ' + board.hero.losses;
      document.getElementById('villain-wins').textContent = 'Wins: ' + board.villain.wins;
      document.getElementById('villain-losses').textContent = 'Losses: ' + board.villain.losses;
    }
    fetch('/api/scoreboard').then(r => r.ok ? r.json() : null).then(b => { if (b) showBoard(b); });
    document.getElementById('fight-btn').addEventListener('click', async () => {
      const payload = {
        hero_name: document.getElementById('hero-name').value,
        hero_weapon: picked('hero-weapon'),
        villain_name: document.getElementById('villain-name').value,
        villain_weapon: picked('villain-weapon'),
      };
      const response = await fetch('/api/fight', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(payload),
      });
      const data = await response.json().catch(() => ({ message: 'HTTP ' + response.status }));
      outcome.textContent = data.message;
      if (response.ok) {
        showBoard(data.scoreboard);
        document.querySelectorAll('input[type=radio]').forEach(el => { el.checked = false; });
      }
    });
  </script>
</body>
</html>
"#
}
