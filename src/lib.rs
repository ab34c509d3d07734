// Bibliothèque du simulateur de rovers martiens
// Expose tous les modules pour utilisation externe (par le binaire)

pub mod types;     // Types de base (Direction, Command, Position)
pub mod error;     // Erreurs de lecture des missions
pub mod geometry;  // Rotations et translations sur la grille
pub mod rover;     // Interpréteur de commandes d'un rover
pub mod plateau;   // Plateau et déploiement des rovers
pub mod mission;   // Lecture du fichier de mission
pub mod report;    // Rapport sérialisable du déploiement
pub mod display;   // Affichage terminal du plateau
pub mod config;    // Configuration du pilote
pub mod app;       // Enchaînement lecture, déploiement, sortie

// Ré-exportation des types principaux pour faciliter l'importation
pub use types::*;
pub use error::RoverError;
pub use plateau::{Deployment, Plateau};
pub use rover::{ControlObserver, NoopObserver, Rover, TraceObserver};
pub use mission::Mission;
