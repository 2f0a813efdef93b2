//! Global CSS styles for Giftbox.
//!
//! Soft pink palette. Class names double as the hooks the state snapshot
//! toggles: `hide`, `show`, `open`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --pink: #ff69b4;
  --pink-deep: #ff1493;
  --pink-accent: #ff4081;
  --blush: #ffe4ec;
  --cream: #fff8fa;
  --ink: #4a2c3a;
  --ink-soft: rgba(74, 44, 58, 0.7);

  --font-serif: 'Playfair Display', Georgia, serif;
  --font-sans: 'Poppins', 'Helvetica Neue', Arial, sans-serif;

  --transition-fast: 300ms ease;
  --transition-slow: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: linear-gradient(160deg, var(--blush), var(--cream));
  color: var(--ink);
  min-height: 100vh;
  overflow-x: hidden;
}

.giftbox-root {
  min-height: 100vh;
  outline: none;
  opacity: 0;
  transition: opacity 1s ease;
}

.giftbox-root.loaded {
  opacity: 1;
}

/* === Welcome === */
.welcome-message {
  position: fixed;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.25rem;
  padding: 2rem;
  text-align: center;
  z-index: 20;
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.welcome-message.hide {
  opacity: 0;
  transform: scale(0.95);
  pointer-events: none;
}

.welcome-title {
  font-family: var(--font-serif);
  font-size: 2.5rem;
  color: var(--pink-deep);
}

.welcome-text {
  color: var(--ink-soft);
  max-width: 28rem;
}

.start-button,
.play-music-button {
  border: none;
  border-radius: 999px;
  padding: 0.8rem 2.2rem;
  font-size: 1rem;
  color: white;
  background: linear-gradient(135deg, var(--pink), var(--pink-deep));
  box-shadow: 0 8px 20px rgba(255, 20, 147, 0.3);
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.start-button:hover,
.play-music-button:hover {
  transform: translateY(-2px);
}

.play-music-button {
  position: fixed;
  left: 1.25rem;
  bottom: 1.25rem;
  z-index: 30;
  padding: 0.6rem 1.4rem;
}

/* === Gift box === */
.gift-container {
  position: fixed;
  inset: 0;
  display: none;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
  z-index: 10;
}

.gift-container.show {
  display: flex;
  animation: popIn 0.6s ease;
}

.gift-box {
  position: relative;
  width: 160px;
  height: 160px;
  cursor: pointer;
}

.gift-body {
  position: absolute;
  bottom: 0;
  width: 100%;
  height: 75%;
  background: var(--pink);
  border-radius: 6px;
}

.gift-ribbon {
  position: absolute;
  left: 50%;
  width: 24px;
  height: 100%;
  transform: translateX(-50%);
  background: var(--pink-deep);
}

.gift-lid {
  position: absolute;
  top: 10%;
  left: -5%;
  width: 110%;
  height: 22%;
  background: var(--pink-accent);
  border-radius: 6px;
  transition: transform 0.8s ease;
  z-index: 2;
}

.gift-bow {
  position: absolute;
  top: -28px;
  left: 50%;
  width: 48px;
  height: 28px;
  transform: translateX(-50%);
  border-radius: 50% 50% 0 0;
  background: var(--pink-deep);
}

.gift-box.open .gift-lid {
  transform: translateY(-120px) rotate(-25deg);
}

.gift-hint {
  color: var(--ink-soft);
  animation: heartBeat 2s infinite;
}

/* === Gallery === */
.gallery {
  position: fixed;
  inset: 0;
  overflow-y: auto;
  padding: 2rem 1rem 6rem;
  opacity: 0;
  visibility: hidden;
  transition: opacity 1s ease;
  z-index: 15;
}

.gallery.show {
  opacity: 1;
  visibility: visible;
}

.gallery-title {
  font-family: var(--font-serif);
  text-align: center;
  color: var(--pink-deep);
  margin-bottom: 1.5rem;
}

.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(140px, 1fr));
  gap: 0.75rem;
}

.gallery-item {
  aspect-ratio: 1;
  border-radius: 12px;
  overflow: hidden;
  cursor: pointer;
  box-shadow: 0 6px 16px rgba(74, 44, 58, 0.15);
  transition: transform var(--transition-fast);
}

.gallery-item:hover {
  transform: scale(1.04);
}

.gallery-item img,
.gallery-item video,
.gallery-placeholder {
  width: 100%;
  height: 100%;
  object-fit: cover;
  background: var(--blush);
}

/* === Modal === */
.modal {
  position: fixed;
  inset: 0;
  background: rgba(74, 44, 58, 0.6);
  opacity: 0;
  transition: opacity var(--transition-fast);
  z-index: 40;
}

.modal.show {
  opacity: 1;
}

.modal-content {
  position: relative;
  max-width: 32rem;
  margin: 8vh auto 0;
  padding: 1.25rem;
  border-radius: 16px;
  background: var(--cream);
  text-align: center;
  transform: translateY(20px);
  transition: transform var(--transition-fast);
}

.modal.show .modal-content {
  transform: translateY(0);
}

#modalImage {
  width: 100%;
  max-height: 55vh;
  object-fit: contain;
  border-radius: 10px;
}

.close-modal {
  position: absolute;
  top: 0.4rem;
  right: 0.8rem;
  font-size: 1.8rem;
  cursor: pointer;
  color: var(--ink-soft);
}

.modal-title {
  font-family: var(--font-serif);
  color: var(--pink-deep);
  margin-top: 0.75rem;
}

.modal-description {
  color: var(--ink-soft);
  margin-top: 0.4rem;
}

.modal-quote {
  font-style: italic;
  margin-top: 0.6rem;
}

/* === Music toggle === */
.music-toggle {
  position: fixed;
  right: 1.25rem;
  bottom: 1.25rem;
  width: 48px;
  height: 48px;
  border: none;
  border-radius: 50%;
  background: var(--pink);
  color: white;
  font-size: 1.1rem;
  cursor: pointer;
  z-index: 30;
}

.music-toggle i {
  font-style: normal;
}

/* === Particles === */
.floating-hearts {
  position: fixed;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
  z-index: 5;
}

.heart {
  position: absolute;
  background: var(--pink);
}

.heart::before,
.heart::after {
  content: '';
  position: absolute;
  width: 100%;
  height: 100%;
  border-radius: 50%;
  background: inherit;
}

.heart::before {
  left: -50%;
}

.heart::after {
  top: -50%;
}

.confetti-layer {
  pointer-events: none;
}

.confetti {
  pointer-events: none;
  z-index: 50;
}

/* === Animations === */
@keyframes heartBeat {
  0%, 100% { scale: 1; }
  50% { scale: 1.15; }
}

@keyframes float {
  0% {
    transform: rotate(45deg) translateY(0) translateX(0);
    opacity: 1;
  }
  100% {
    transform: rotate(45deg) translateY(-100vh) translateX(var(--drift, 0px));
    opacity: 0;
  }
}

@keyframes popIn {
  from { transform: scale(0.6); opacity: 0; }
  to { transform: scale(1); opacity: 1; }
}
"#;
