use serde::Serialize;

/// Модель Actiwatch, закодированная первой буквой идентификатора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DeviceModel {
    /// `D`
    Actiwatch7,
    /// `I`
    ActiwatchInsomnia,
    /// `L`
    ActiwatchL,
    /// `M`
    ActiwatchMini,
    /// `P`
    ActiwatchLPlus,
    /// `S`
    ActiwatchS,
    /// `T`
    ActiwatchT,
    /// `V`
    Actiwatch4,
}

/// Канал данных прибора.
///
/// Декодируется только первый столбец (активность); дополнительные каналы
/// лишь сообщаются в лог.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Channel {
    Activity,
    Marker,
    Light,
    Pressure,
    Sound,
    Temperature,
}

/// Каналы, которые пишет любая модель.
pub const DEFAULT_CHANNELS: [Channel; 2] = [Channel::Activity, Channel::Marker];

/// Результат определения модели по идентификатору.
///
/// Неизвестная модель не считается ошибкой: декодирование продолжается, а вместо
/// названия модели остаётся один из двух именованных вариантов.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModelResolution {
    /// Буква найдена в таблице моделей
    Known(DeviceModel),
    /// Буква есть, но такая модель не поддерживается
    Unsupported { code: char },
    /// Идентификатор пуст или начинается не с буквы
    Undetermined,
}

impl DeviceModel {
    pub const ALL: [DeviceModel; 8] = [
        DeviceModel::Actiwatch7,
        DeviceModel::ActiwatchInsomnia,
        DeviceModel::ActiwatchL,
        DeviceModel::ActiwatchMini,
        DeviceModel::ActiwatchLPlus,
        DeviceModel::ActiwatchS,
        DeviceModel::ActiwatchT,
        DeviceModel::Actiwatch4,
    ];

    /// Ищет модель по букве кода (регистр учитывается: ожидается
    /// заглавная буква).
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'D' => Some(DeviceModel::Actiwatch7),
            'I' => Some(DeviceModel::ActiwatchInsomnia),
            'L' => Some(DeviceModel::ActiwatchL),
            'M' => Some(DeviceModel::ActiwatchMini),
            'P' => Some(DeviceModel::ActiwatchLPlus),
            'S' => Some(DeviceModel::ActiwatchS),
            'T' => Some(DeviceModel::ActiwatchT),
            'V' => Some(DeviceModel::Actiwatch4),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            DeviceModel::Actiwatch7 => 'D',
            DeviceModel::ActiwatchInsomnia => 'I',
            DeviceModel::ActiwatchL => 'L',
            DeviceModel::ActiwatchMini => 'M',
            DeviceModel::ActiwatchLPlus => 'P',
            DeviceModel::ActiwatchS => 'S',
            DeviceModel::ActiwatchT => 'T',
            DeviceModel::Actiwatch4 => 'V',
        }
    }

    /// Название модели для отображения
    pub fn name(&self) -> &'static str {
        match self {
            DeviceModel::Actiwatch7 => "Actiwatch-7",
            DeviceModel::ActiwatchInsomnia => "Actiwatch-Insomnia (pressure sens.)",
            DeviceModel::ActiwatchL => "Actiwatch-L (amb. light)",
            DeviceModel::ActiwatchMini => "Actiwatch-Mini",
            DeviceModel::ActiwatchLPlus => "Actiwatch-L-Plus (amb. light)",
            DeviceModel::ActiwatchS => "Actiwatch-S (env. sound)",
            DeviceModel::ActiwatchT => "Actiwatch-T (temp.)",
            DeviceModel::Actiwatch4 => "Actiwatch-4",
        }
    }

    /// Дополнительный канал, который модель пишет после активности и
    /// маркера.
    pub fn additional_channel(&self) -> Option<Channel> {
        match self {
            DeviceModel::Actiwatch7 | DeviceModel::ActiwatchL | DeviceModel::ActiwatchLPlus => {
                Some(Channel::Light)
            }
            DeviceModel::ActiwatchInsomnia => Some(Channel::Pressure),
            DeviceModel::ActiwatchS => Some(Channel::Sound),
            DeviceModel::ActiwatchT => Some(Channel::Temperature),
            DeviceModel::ActiwatchMini | DeviceModel::Actiwatch4 => None,
        }
    }
}

impl ModelResolution {
    /// Определяет модель по первому символу идентификатора.
    pub fn from_identifier(uuid: &str) -> Self {
        match uuid.chars().next() {
            Some(c) if c.is_alphabetic() => {
                // `to_uppercase` может дать несколько символов (ß → SS),
                // в таблице только ASCII, поэтому берём первый
                let code = c.to_uppercase().next().unwrap_or(c);
                match DeviceModel::from_code(code) {
                    Some(model) => ModelResolution::Known(model),
                    None => ModelResolution::Unsupported { code },
                }
            }
            _ => ModelResolution::Undetermined,
        }
    }

    pub fn model(&self) -> Option<DeviceModel> {
        match self {
            ModelResolution::Known(m) => Some(*m),
            _ => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, ModelResolution::Known(_))
    }

    /// Название модели либо имя заглушки.
    pub fn name(&self) -> &'static str {
        match self {
            ModelResolution::Known(m) => m.name(),
            ModelResolution::Unsupported { .. } => "Unsupported model",
            ModelResolution::Undetermined => "Undetermined model",
        }
    }
}

/// Таблица поддерживаемых моделей в виде `- D: Actiwatch-7` по строке.
pub fn supported_models_listing() -> String {
    DeviceModel::ALL
        .iter()
        .map(|m| format!("- {}: {}", m.code(), m.name()))
        .collect::<Vec<_>>()
        .join("\n")
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов
////////////////////////////////////////////////////////////////////////////////

impl std::fmt::Display for DeviceModel {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for ModelResolution {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for Channel {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let s = match self {
            Channel::Activity => "Activity",
            Channel::Marker => "Marker",
            Channel::Light => "Light",
            Channel::Pressure => "Pressure",
            Channel::Sound => "Sound",
            Channel::Temperature => "Temp.",
        };
        f.write_str(s)
    }
}
