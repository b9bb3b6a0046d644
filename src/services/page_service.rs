use crate::config::Config;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>{{hero}} Protects {{city}}</title>
    <style>
        body {
            font-family: 'Courier New', monospace;
            background: linear-gradient(135deg, #1a1a1a 0%, #2d2d30 100%);
            color: #f0f0f0;
            margin: 0;
            padding: 20px;
            min-height: 100vh;
        }
        .container {
            max-width: 800px;
            margin: 0 auto;
            text-align: center;
            padding: 40px 20px;
        }
        .hero-badge {
            background: linear-gradient(45deg, #ffd700, #ffed4e);
            color: #1a1a1a;
            padding: 10px 20px;
            border-radius: 25px;
            font-weight: bold;
            display: inline-block;
            margin-bottom: 30px;
            box-shadow: 0 4px 15px rgba(255, 215, 0, 0.3);
        }
        .city-name {
            font-size: 2.5em;
            color: #00bcd4;
            text-shadow: 0 0 10px #00bcd4;
            margin: 20px 0;
        }
        .status {
            background: #2e7d32;
            padding: 15px;
            border-radius: 10px;
            margin: 20px 0;
            border-left: 5px solid #4caf50;
        }
        .info-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 20px;
            margin: 30px 0;
        }
        .info-card {
            background: rgba(255, 255, 255, 0.1);
            padding: 20px;
            border-radius: 10px;
            border: 1px solid rgba(255, 255, 255, 0.2);
        }
        .bat-symbol {
            font-size: 4em;
            color: #ffd700;
            text-shadow: 0 0 20px #ffd700;
            margin: 20px 0;
        }
        .version-badge {
            position: fixed;
            top: 20px;
            right: 20px;
            background: #673ab7;
            color: white;
            padding: 8px 12px;
            border-radius: 15px;
            font-size: 0.8em;
        }
        @keyframes pulse {
            0% { transform: scale(1); }
            50% { transform: scale(1.05); }
            100% { transform: scale(1); }
        }
        .pulse { animation: pulse 2s infinite; }
    </style>
</head>
<body>
    <div class="version-badge">v{{version}} | {{environment}}</div>
    <div class="container">
        <div class="bat-symbol pulse">&#129415;</div>
        <div class="hero-badge">{{hero}} IS ON DUTY</div>
        <div class="city-name">{{city}}</div>
        <div class="status">
            <h2>&#128737;&#65039; CITY STATUS: PROTECTED</h2>
            <p>The Dark Knight's GitOps deployment is active and monitoring all threats.</p>
        </div>

        <div class="info-grid">
            <div class="info-card">
                <h3>&#127970; Location</h3>
                <p><strong>{{city}}</strong></p>
                <p>Pod: {{hostname}}</p>
            </div>
            <div class="info-card">
                <h3>&#9881;&#65039; Environment</h3>
                <p><strong>{{environment_upper}}</strong></p>
                <p>Deployed via ArgoCD</p>
            </div>
            <div class="info-card">
                <h3>&#128640; Version</h3>
                <p><strong>{{version}}</strong></p>
                <p>GitOps Powered</p>
            </div>
            <div class="info-card">
                <h3>&#9200; Last Check</h3>
                <p><strong>{{timestamp}}</strong></p>
                <p>All systems operational</p>
            </div>
        </div>

        <div style="margin-top: 40px; padding: 20px; background: rgba(255, 193, 7, 0.1); border-radius: 10px;">
            <h3>&#129415; GitOps Status</h3>
            <p>&#9989; Deployment automated via ArgoCD</p>
            <p>&#9989; Configuration managed by Kustomize</p>
            <p>&#9989; CI/CD powered by GitHub Actions</p>
            <p>&#9989; Running on Kubernetes (K3s)</p>
        </div>
    </div>
</body>
</html>
"#;

/// Render the landing page. Pure substitution into the fixed template; the
/// only runtime inputs are the hostname and a preformatted timestamp.
pub fn render_home(config: &Config, hostname: &str, timestamp: &str) -> String {
    PAGE_TEMPLATE
        .replace("{{hero}}", &config.hero)
        .replace("{{city}}", &config.city)
        .replace("{{environment_upper}}", &config.environment.to_uppercase())
        .replace("{{environment}}", &config.environment)
        .replace("{{version}}", &config.version)
        .replace("{{hostname}}", hostname)
        .replace("{{timestamp}}", timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            city: "Metropolis".to_string(),
            hero: "Batman".to_string(),
            environment: "dev".to_string(),
            version: "2.1.0".to_string(),
            port: 5000,
        }
    }

    #[test]
    fn substitutes_all_placeholders() {
        let page = render_home(&test_config(), "pod-abc123", "2026-08-07 12:00:00 UTC");
        assert!(page.contains("Metropolis"));
        assert!(page.contains("Batman IS ON DUTY"));
        assert!(page.contains("Pod: pod-abc123"));
        assert!(page.contains("2026-08-07 12:00:00 UTC"));
        assert!(page.contains("v2.1.0 | dev"));
        assert!(page.contains("CITY STATUS: PROTECTED"));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn environment_card_is_upper_cased() {
        let page = render_home(&test_config(), "host", "now");
        assert!(page.contains("<strong>DEV</strong>"));
    }
}
