//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (quatre champs entiers, résultat, erreur,
//! démarche) et offrir les actions (C/CLR/AC, calcul) sans logique d’affichage.
//!
//! Contrats :
//! - Le seul calcul passe par `noyau::eval_operation` ; ici on ne fait que lire des entiers.
//! - Actions déterministes, sans effet de bord caché.
//! - Sur erreur, le dernier résultat reste affiché ; la démarche est effacée.

use calculatrice_rationnelle::noyau::{eval_operation, DemarcheNoyau, Operation};

/// Noms des champs, dans l’ordre de `AppCalc::entrees`.
pub const NOMS_CHAMPS: [&str; 4] = [
    "numérateur 1",
    "dénominateur 1",
    "numérateur 2",
    "dénominateur 2",
];

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub saisie: String,
    pub reduits: String,
    pub brut: String,
    pub resultat: String,
}

impl From<DemarcheNoyau> for Demarche {
    fn from(d: DemarcheNoyau) -> Self {
        Self {
            saisie: d.saisie,
            reduits: d.reduits,
            brut: d.brut,
            resultat: d.resultat,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur : n1, d1, n2, d2 ---
    pub entrees: [String; 4],

    // --- sorties ---
    pub resultat: String,          // "num/den"
    pub erreur: String,            // message d’erreur (saisie ou noyau)
    pub derniere_op: Option<Operation>,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus au premier champ.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entrees: [String::new(), "1".into(), String::new(), "1".into()],
            resultat: String::new(),
            erreur: String::new(),
            derniere_op: None,
            demarche: Demarche::default(),
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (champs + résultats).
    pub fn reset_total(&mut self) {
        *self = Self::default();
    }

    /// C : effacer seulement les champs (sans toucher aux résultats).
    pub fn clear_entrees(&mut self) {
        for champ in &mut self.entrees {
            champ.clear();
        }
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher aux champs).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.derniere_op = None;
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Place une erreur. On CONSERVE `resultat` (pas “d’écran vide” sur une faute).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    pub fn set_resultats(&mut self, resultat: impl Into<String>, op: Operation, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.derniere_op = Some(op);
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Lit les quatre champs puis évalue `op` via le noyau.
    pub fn calculer(&mut self, op: Operation) {
        let valeurs = match self.lire_entrees() {
            Ok(v) => v,
            Err(msg) => {
                self.set_erreur(msg);
                return;
            }
        };

        match eval_operation((valeurs[0], valeurs[1]), (valeurs[2], valeurs[3]), op) {
            Ok((r, d)) => self.set_resultats(r.to_string(), op, d.into()),
            Err(e) => self.set_erreur(format!("Erreur : {e}")),
        }
    }

    fn lire_entrees(&self) -> Result<[i32; 4], String> {
        let mut valeurs = [0i32; 4];
        for (i, champ) in self.entrees.iter().enumerate() {
            let s = champ.trim();
            valeurs[i] = s
                .parse::<i32>()
                .map_err(|_| format!("entier invalide : {} = {s:?}", NOMS_CHAMPS[i]))?;
        }
        Ok(valeurs)
    }
}
